//! Atomic fake-value provider.
//!
//! [`ValueFaker`] is the capability interface the generators draw every random
//! value through; [`Faker`] is the default implementation, backed by the `fake`
//! crate for names/emails/lorem and hand-formatted identifiers and dates. All
//! randomness comes from the injected RNG, so a seeded run is reproducible
//! end-to-end.

use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::Fake;
use rand::Rng;

/// Capability interface for realistic atomic values and bounded random draws.
///
/// All draws consume the implementation's RNG exactly once per call site, in
/// call order; swapping the implementation (e.g. a mock in tests) does not
/// change which draws the generators make.
pub trait ValueFaker {
    /// A single lowercase lorem word.
    fn word(&mut self) -> String;

    /// A capitalized sentence of `word_count` words, with trailing period.
    fn sentence(&mut self, word_count: usize) -> String;

    /// A paragraph of `sentence_count` sentences.
    fn paragraph(&mut self, sentence_count: usize) -> String;

    /// A full person name ("First Last").
    fn full_name(&mut self) -> String;

    fn first_name(&mut self) -> String;

    fn last_name(&mut self) -> String;

    fn email(&mut self) -> String;

    /// A calendar date, `YYYY-MM-DD`.
    fn date(&mut self) -> String;

    /// A timestamp, `YYYY-MM-DD HH:MM:SS`.
    fn datetime(&mut self) -> String;

    fn url(&mut self) -> String;

    /// A version-4 UUID string, drawn from the injected RNG rather than OS
    /// entropy so it stays on the deterministic path.
    fn uuid(&mut self) -> String;

    /// A string of `len` random decimal digits.
    fn digits(&mut self, len: usize) -> String;

    fn year(&mut self) -> String;

    /// Uniform integer in the closed range `[min, max]`.
    ///
    /// An inverted range (`min > max`) panics in the underlying sampler;
    /// bounds are the caller's responsibility.
    fn int_range(&mut self, min: i64, max: i64) -> i64;

    /// Uniform float in the closed range `[min, max]`.
    fn float_range(&mut self, min: f64, max: f64) -> f64;

    /// `true` with the given probability.
    fn bool_with(&mut self, probability: f64) -> bool;

    /// Uniform index into a collection of length `len` (non-zero).
    fn index(&mut self, len: usize) -> usize;

    /// Uniformly pick one element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        &items[self.index(items.len())]
    }
}

/// Default [`ValueFaker`] over any RNG.
pub struct Faker<R: Rng> {
    rng: R,
}

impl<R: Rng> Faker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ValueFaker for Faker<R> {
    fn word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }

    fn sentence(&mut self, word_count: usize) -> String {
        Sentence(word_count..word_count + 1).fake_with_rng(&mut self.rng)
    }

    fn paragraph(&mut self, sentence_count: usize) -> String {
        Paragraph(sentence_count..sentence_count + 1).fake_with_rng(&mut self.rng)
    }

    fn full_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    fn date(&mut self) -> String {
        let year = self.rng.random_range(1970..2025);
        let month = self.rng.random_range(1..=12);
        let day = self.rng.random_range(1..=28); // safe for all months
        format!("{:04}-{:02}-{:02}", year, month, day)
    }

    fn datetime(&mut self) -> String {
        let date = self.date();
        let hour = self.rng.random_range(0..24);
        let minute = self.rng.random_range(0..60);
        let second = self.rng.random_range(0..60);
        format!("{} {:02}:{:02}:{:02}", date, hour, minute, second)
    }

    fn url(&mut self) -> String {
        format!(
            "https://example{}.com/{}",
            self.rng.random_range(1..1000),
            Word().fake_with_rng::<String, _>(&mut self.rng)
        )
    }

    fn uuid(&mut self) -> String {
        format!(
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            self.rng.random::<u32>(),
            self.rng.random::<u16>(),
            (self.rng.random::<u16>() & 0x0FFF) | 0x4000, // version 4
            (self.rng.random::<u16>() & 0x3FFF) | 0x8000, // variant
            self.rng.random::<u64>() & 0xFFFF_FFFF_FFFF_u64
        )
    }

    fn digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.rng.random_range(0..10u8)))
            .collect()
    }

    fn year(&mut self) -> String {
        self.rng.random_range(1990..=2025i32).to_string()
    }

    fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    fn float_range(&mut self, min: f64, max: f64) -> f64 {
        self.rng.random_range(min..=max)
    }

    fn bool_with(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn faker(seed: u64) -> Faker<ChaCha8Rng> {
        Faker::new(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_deterministic_generation() {
        let mut a = faker(42);
        let mut b = faker(42);

        assert_eq!(a.full_name(), b.full_name());
        assert_eq!(a.email(), b.email());
        assert_eq!(a.uuid(), b.uuid());
        assert_eq!(a.float_range(10.0, 100.0), b.float_range(10.0, 100.0));
    }

    #[test]
    fn test_email_shape() {
        let mut fake = faker(42);
        let email = fake.email();
        assert!(email.contains('@'));
    }

    #[test]
    fn test_uuid_is_version_4() {
        let mut fake = faker(42);
        let uuid = fake.uuid();
        assert_eq!(uuid.len(), 36);
        assert_eq!(uuid.matches('-').count(), 4);
        // version nibble is the first char of the third group
        assert_eq!(uuid.as_bytes()[14], b'4');
    }

    #[test]
    fn test_date_shape() {
        let mut fake = faker(7);
        let date = fake.date();
        assert_eq!(date.len(), 10);
        assert_eq!(date.matches('-').count(), 2);
    }

    #[test]
    fn test_digits_len() {
        let mut fake = faker(7);
        let id = fake.digits(6);
        assert_eq!(id.len(), 6);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_int_range_degenerate() {
        let mut fake = faker(1);
        assert_eq!(fake.int_range(5, 5), 5);
    }

    #[test]
    fn test_sentence_word_count() {
        let mut fake = faker(3);
        let s = fake.sentence(4);
        assert_eq!(s.split_whitespace().count(), 4);
        assert!(s.ends_with('.'));
    }
}

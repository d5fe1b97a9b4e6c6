//! Deterministic synthetic data generator for agent and LLM tooling tests.
//!
//! Generates text, JSON (optionally schema-driven), multi-turn conversations,
//! tool-call payloads, and agent execution traces, reproducibly from a seed.
//!
//! # Example
//!
//! ```rust
//! use datasynth::config::{DataKind, GeneratorConfig};
//! use datasynth::generator::DataGenerator;
//!
//! let config = GeneratorConfig::new(DataKind::Json, 5).with_seed(42);
//! let dataset = DataGenerator::new().generate(&config).unwrap();
//!
//! assert_eq!(dataset.samples.len(), 5);
//! ```

// Allow dead code for items that are part of the public API but only used in tests
#![allow(dead_code)]

pub mod config;
pub mod error;
pub mod faker;
pub mod generator;
pub mod json_schema;
pub mod rng;
pub mod schema;
pub mod templates;

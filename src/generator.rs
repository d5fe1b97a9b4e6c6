//! Synthetic record generation.
//!
//! [`SchemaGenerator`] walks a parsed [`SchemaNode`] tree and produces one
//! conforming value per call; [`DataGenerator`] dispatches over [`DataKind`],
//! seeds the run RNG exactly once at entry, and wraps the batch in a
//! [`Dataset`] envelope.

use crate::config::{DataKind, GeneratorConfig};
use crate::error::{Error, SchemaError};
use crate::faker::{Faker, ValueFaker};
use crate::rng::seeded_rng;
use crate::schema::{SchemaNode, StringFormat};
use crate::templates::{
    self, DEFAULT_CONVERSATION_TEMPLATE, DEFAULT_TOOL_TEMPLATE, TurnTemplate,
};
use rand_chacha::ChaCha8Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::io::Write;
use std::time::Instant;

/// Probability that a non-required object property appears in a generated
/// record.
pub const OPTIONAL_FIELD_PROBABILITY: f64 = 0.8;

/// Probability that a generated agent trace reports success.
pub const TRACE_SUCCESS_PROBABILITY: f64 = 0.8;

// Default ranges applied when a schema omits its bounds.
const DEFAULT_INT_MIN: i64 = 0;
const DEFAULT_INT_MAX: i64 = 1000;
const DEFAULT_NUMBER_MIN: f64 = 0.0;
const DEFAULT_NUMBER_MAX: f64 = 1.0;
const DEFAULT_MIN_ITEMS: usize = 1;
const DEFAULT_MAX_ITEMS: usize = 5;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Recursive schema-conformant value generator.
///
/// All randomness flows through the borrowed faker, so the draw sequence (and
/// with it, seeded determinism) is fully defined by the schema shape.
pub struct SchemaGenerator<'a, F: ValueFaker> {
    faker: &'a mut F,
}

impl<'a, F: ValueFaker> SchemaGenerator<'a, F> {
    pub fn new(faker: &'a mut F) -> Self {
        Self { faker }
    }

    /// Produce exactly `count` independent records for an object-rooted schema.
    ///
    /// Records are not deduplicated; two may coincide by chance.
    pub fn from_schema(
        &mut self,
        schema: &SchemaNode,
        count: usize,
    ) -> Result<Vec<Value>, SchemaError> {
        if !matches!(schema, SchemaNode::Object { .. }) {
            return Err(SchemaError::NonObjectRoot(schema.kind().to_string()));
        }
        Ok((0..count).map(|_| self.generate_value(schema)).collect())
    }

    /// Produce one value conforming to `node`.
    pub fn generate_value(&mut self, node: &SchemaNode) -> Value {
        match node {
            SchemaNode::String {
                enum_values,
                format,
            } => self.generate_string(enum_values.as_deref(), *format),
            SchemaNode::Integer { minimum, maximum } => {
                let min = minimum.unwrap_or(DEFAULT_INT_MIN);
                let max = maximum.unwrap_or(DEFAULT_INT_MAX);
                json!(self.faker.int_range(min, max))
            }
            SchemaNode::Number { minimum, maximum } => {
                let min = minimum.unwrap_or(DEFAULT_NUMBER_MIN);
                let max = maximum.unwrap_or(DEFAULT_NUMBER_MAX);
                json!(round4(self.faker.float_range(min, max)))
            }
            SchemaNode::Boolean => json!(self.faker.bool_with(0.5)),
            SchemaNode::Array {
                items,
                min_items,
                max_items,
            } => {
                let min = min_items.unwrap_or(DEFAULT_MIN_ITEMS);
                let max = max_items.unwrap_or(DEFAULT_MAX_ITEMS);
                let len = self.faker.int_range(min as i64, max as i64) as usize;
                let values: Vec<Value> = (0..len).map(|_| self.generate_value(items)).collect();
                Value::Array(values)
            }
            SchemaNode::Object {
                properties,
                required,
            } => {
                let mut object = Map::new();
                for (name, child) in properties {
                    // Required fields never consume a presence draw.
                    let include = required.iter().any(|r| r == name)
                        || self.faker.bool_with(OPTIONAL_FIELD_PROBABILITY);
                    if include {
                        object.insert(name.clone(), self.generate_value(child));
                    }
                }
                Value::Object(object)
            }
            SchemaNode::Null => Value::Null,
        }
    }

    fn generate_string(
        &mut self,
        enum_values: Option<&[String]>,
        format: Option<StringFormat>,
    ) -> Value {
        if let Some(candidates) = enum_values {
            // Non-empty by parse-time invariant.
            return json!(self.faker.pick(candidates));
        }
        let value = match format {
            Some(StringFormat::Email) => self.faker.email(),
            Some(StringFormat::Date) => self.faker.date(),
            Some(StringFormat::Uri) => self.faker.url(),
            Some(StringFormat::Uuid) => self.faker.uuid(),
            None => {
                // Short sentence fragment as string filler.
                let sentence = self.faker.sentence(4);
                sentence.trim_end_matches('.').to_string()
            }
        };
        json!(value)
    }
}

/// A single turn within a multi-turn conversation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ConversationTurn {
    pub role: String,
    pub content: String,
    pub tool_calls: Option<Vec<Value>>,
}

/// Run metadata attached to every generated dataset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    pub generated_count: usize,
    pub generation_time_ms: f64,
    pub data_type: DataKind,
    /// Envelope timestamp (RFC 3339). Not covered by the determinism
    /// contract, which applies to the sample sequence only.
    pub generated_at: String,
}

/// The output envelope: generated samples plus run metadata.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Dataset {
    pub samples: Vec<Value>,
    pub metadata: Metadata,
}

impl Dataset {
    /// Write samples as newline-delimited JSON, one record per line.
    pub fn write_jsonl<W: Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        for sample in &self.samples {
            writeln!(writer, "{}", sample)?;
        }
        Ok(())
    }
}

/// Dispatcher over all [`DataKind`] values.
///
/// Every public method seeds one fresh RNG at entry and runs synchronously to
/// completion; no state is shared across calls.
#[derive(Debug, Default)]
pub struct DataGenerator;

impl DataGenerator {
    pub fn new() -> Self {
        Self
    }

    fn faker(&self, config: &GeneratorConfig) -> Faker<ChaCha8Rng> {
        Faker::new(seeded_rng(config.seed))
    }

    /// Random paragraphs, `min_sentences..=max_sentences` sentences each.
    pub fn generate_text(&self, config: &GeneratorConfig) -> Result<Vec<String>, Error> {
        config.validate()?;
        let mut faker = self.faker(config);
        let min_sentences = config.constraint_usize("min_sentences", 1);
        let max_sentences = config.constraint_usize("max_sentences", 5);
        let texts = (0..config.count)
            .map(|_| {
                let n = faker.int_range(min_sentences as i64, max_sentences as i64) as usize;
                faker.paragraph(n)
            })
            .collect();
        Ok(texts)
    }

    /// Multi-turn conversations from a named template.
    ///
    /// An unknown template name falls back to the default template; the
    /// fallback is reported on stderr but is not an error.
    pub fn generate_conversations(
        &self,
        config: &GeneratorConfig,
    ) -> Result<Vec<Vec<ConversationTurn>>, Error> {
        config.validate()?;
        let mut faker = self.faker(config);
        let requested = config
            .constraint_str("template")
            .unwrap_or(DEFAULT_CONVERSATION_TEMPLATE);
        let turns_template: &[TurnTemplate] = match templates::conversation_template(requested) {
            Some(turns) => turns,
            None => {
                eprintln!(
                    "warning: unknown conversation template '{}', using '{}'",
                    requested, DEFAULT_CONVERSATION_TEMPLATE
                );
                templates::conversation_template(DEFAULT_CONVERSATION_TEMPLATE)
                    .unwrap_or_default()
            }
        };

        let conversations = (0..config.count)
            .map(|_| {
                turns_template
                    .iter()
                    .map(|turn| ConversationTurn {
                        role: turn.role.to_string(),
                        content: templates::render(turn.content, &mut faker),
                        tool_calls: None,
                    })
                    .collect()
            })
            .collect();
        Ok(conversations)
    }

    /// Tool-call payloads in the standard function-call envelope.
    pub fn generate_tool_calls(&self, config: &GeneratorConfig) -> Result<Vec<Value>, Error> {
        config.validate()?;
        let mut faker = self.faker(config);
        let requested = config.constraint_str("tool").unwrap_or(DEFAULT_TOOL_TEMPLATE);
        let template = match templates::tool_template(requested) {
            Some(template) => template,
            None => {
                eprintln!(
                    "warning: unknown tool template '{}', using '{}'",
                    requested, DEFAULT_TOOL_TEMPLATE
                );
                templates::tool_template(DEFAULT_TOOL_TEMPLATE)
                    .expect("default tool template exists")
            }
        };

        let calls = (0..config.count)
            .map(|_| {
                let mut schema_gen = SchemaGenerator::new(&mut faker);
                let arguments = schema_gen.generate_value(&template.parameters);
                json!({
                    "id": faker.uuid(),
                    "type": "function",
                    "function": {
                        "name": template.name,
                        "arguments": arguments.to_string(),
                    },
                })
            })
            .collect();
        Ok(calls)
    }

    /// Agent execution traces: 2-6 steps with cumulative timestamps.
    pub fn generate_agent_traces(&self, config: &GeneratorConfig) -> Result<Vec<Value>, Error> {
        config.validate()?;
        let mut faker = self.faker(config);
        let tool_names = templates::tool_template_names();

        let traces = (0..config.count)
            .map(|_| {
                let num_steps = faker.int_range(2, 6);
                let mut steps = Vec::with_capacity(num_steps as usize);
                // Timestamps are cumulative delay sums from a fixed origin so
                // seeded runs stay byte-identical.
                let mut timestamp = 0.0f64;
                for step_idx in 0..num_steps {
                    timestamp += faker.float_range(0.1, 2.0);
                    let step_type = *faker.pick(&["thought", "tool_call", "observation"]);
                    let mut step = Map::new();
                    step.insert("step".to_string(), json!(step_idx));
                    step.insert("type".to_string(), json!(step_type));
                    step.insert("timestamp".to_string(), json!(round4(timestamp)));
                    match step_type {
                        "thought" => {
                            step.insert("content".to_string(), json!(faker.sentence(6)));
                        }
                        "tool_call" => {
                            let key = *faker.pick(&tool_names);
                            let tool = templates::tool_template(key)
                                .expect("tool template keys are valid");
                            step.insert("tool".to_string(), json!(tool.name));
                            step.insert(
                                "arguments".to_string(),
                                json!({ "query": faker.sentence(4) }),
                            );
                        }
                        _ => {
                            step.insert("content".to_string(), json!(faker.paragraph(2)));
                        }
                    }
                    steps.push(Value::Object(step));
                }
                json!({
                    "trace_id": faker.uuid(),
                    "agent": format!("{}_agent", faker.word()),
                    "task": faker.sentence(6),
                    "steps": steps,
                    "final_answer": faker.paragraph(1),
                    "success": faker.bool_with(TRACE_SUCCESS_PROBABILITY),
                })
            })
            .collect();
        Ok(traces)
    }

    /// JSON objects: schema-driven when a schema is configured, otherwise the
    /// built-in free-form record shape.
    pub fn generate_json(&self, config: &GeneratorConfig) -> Result<Vec<Value>, Error> {
        config.validate()?;
        let mut faker = self.faker(config);

        if let Some(schema) = &config.schema {
            let mut schema_gen = SchemaGenerator::new(&mut faker);
            return Ok(schema_gen.from_schema(schema, config.count)?);
        }

        let records = (0..config.count)
            .map(|_| {
                let tag_count = faker.int_range(1, 5) as usize;
                json!({
                    "id": faker.uuid(),
                    "name": faker.full_name(),
                    "email": faker.email(),
                    "value": round2(faker.float_range(0.0, 1000.0)),
                    "active": faker.bool_with(0.5),
                    "tags": (0..tag_count).map(|_| faker.word()).collect::<Vec<_>>(),
                    "created_at": faker.datetime(),
                })
            })
            .collect();
        Ok(records)
    }

    /// Generate a full [`Dataset`] for the given config.
    ///
    /// Non-schema kinds get a 0-based `index` field injected into every
    /// sample; schema-driven records carry only the schema-declared fields.
    pub fn generate(&self, config: &GeneratorConfig) -> Result<Dataset, Error> {
        config.validate()?;
        let start = Instant::now();

        let samples: Vec<Value> = match config.kind {
            DataKind::Text => self
                .generate_text(config)?
                .into_iter()
                .enumerate()
                .map(|(i, text)| json!({ "index": i, "text": text }))
                .collect(),
            DataKind::Conversation => self
                .generate_conversations(config)?
                .into_iter()
                .enumerate()
                .map(|(i, turns)| json!({ "index": i, "turns": turns }))
                .collect(),
            DataKind::ToolCall => index_samples(self.generate_tool_calls(config)?),
            DataKind::AgentTrace => index_samples(self.generate_agent_traces(config)?),
            DataKind::Json => {
                let records = self.generate_json(config)?;
                if config.schema.is_some() {
                    records
                } else {
                    index_samples(records)
                }
            }
        };

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        Ok(Dataset {
            metadata: Metadata {
                generated_count: samples.len(),
                generation_time_ms: round2(elapsed_ms),
                data_type: config.kind,
                generated_at: chrono::Utc::now().to_rfc3339(),
            },
            samples,
        })
    }
}

/// Prepend a 0-based `index` field to each object sample.
fn index_samples(records: Vec<Value>) -> Vec<Value> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let mut object = Map::new();
            object.insert("index".to_string(), json!(i));
            if let Value::Object(fields) = record {
                object.extend(fields);
            }
            Value::Object(object)
        })
        .collect()
}

//! Generation run configuration.

use crate::error::ConfigError;
use crate::schema::SchemaNode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The kinds of synthetic data the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    Text,
    Json,
    Conversation,
    ToolCall,
    AgentTrace,
}

impl DataKind {
    pub const ALL: [DataKind; 5] = [
        DataKind::Text,
        DataKind::Json,
        DataKind::Conversation,
        DataKind::ToolCall,
        DataKind::AgentTrace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataKind::Text => "text",
            DataKind::Json => "json",
            DataKind::Conversation => "conversation",
            DataKind::ToolCall => "tool_call",
            DataKind::AgentTrace => "agent_trace",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(DataKind::Text),
            "json" => Ok(DataKind::Json),
            "conversation" => Ok(DataKind::Conversation),
            "tool_call" => Ok(DataKind::ToolCall),
            "agent_trace" => Ok(DataKind::AgentTrace),
            other => Err(ConfigError::UnknownKind(other.to_string())),
        }
    }
}

/// Immutable description of one generation run.
///
/// `schema` is only meaningful for [`DataKind::Json`]; `constraints` carries
/// kind-specific string options (`min_sentences`/`max_sentences` for text,
/// `template` for conversations, `tool` for tool calls). Unrecognized keys
/// are ignored.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub kind: DataKind,
    pub count: usize,
    pub seed: Option<u64>,
    pub schema: Option<SchemaNode>,
    pub constraints: BTreeMap<String, String>,
}

impl GeneratorConfig {
    pub fn new(kind: DataKind, count: usize) -> Self {
        Self {
            kind,
            count,
            seed: None,
            schema: None,
            constraints: BTreeMap::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_schema(mut self, schema: SchemaNode) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_constraint(mut self, key: &str, value: &str) -> Self {
        self.constraints.insert(key.to_string(), value.to_string());
        self
    }

    /// A run either produces the full batch or fails before the first record.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount(self.count));
        }
        Ok(())
    }

    /// Numeric constraint lookup; unparsable values fall back to the default.
    pub fn constraint_usize(&self, key: &str, default: usize) -> usize {
        self.constraints
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    pub fn constraint_str(&self, key: &str) -> Option<&str> {
        self.constraints.get(key).map(String::as_str)
    }
}

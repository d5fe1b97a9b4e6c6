//! Built-in conversation and tool-call templates.
//!
//! Conversation turn content may contain `{placeholder}` tokens that are
//! resolved against the faker at generation time; unknown placeholder names
//! resolve to a single random word. Tool templates carry their parameter
//! schema pre-parsed into a [`SchemaNode`], ready for the schema generator.

use crate::faker::ValueFaker;
use crate::schema::SchemaNode;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::json;
use std::collections::BTreeMap;

/// Fallback when an unknown conversation template name is requested.
pub const DEFAULT_CONVERSATION_TEMPLATE: &str = "customer_support";
/// Fallback when an unknown tool template name is requested.
pub const DEFAULT_TOOL_TEMPLATE: &str = "search";

/// One turn of a conversation template.
#[derive(Debug, Clone, Copy)]
pub struct TurnTemplate {
    pub role: &'static str,
    pub content: &'static str,
}

const fn turn(role: &'static str, content: &'static str) -> TurnTemplate {
    TurnTemplate { role, content }
}

static CUSTOMER_SUPPORT: &[TurnTemplate] = &[
    turn(
        "system",
        "You are a helpful customer support agent for an e-commerce platform. \
         Be polite, concise, and solution-oriented.",
    ),
    turn(
        "user",
        "Hi, I placed order #{order_id} and haven't received it yet.",
    ),
    turn(
        "assistant",
        "I'm sorry to hear that. Let me look up your order right away. \
         Can you confirm the email address on the account?",
    ),
    turn("user", "Sure, it's {email}."),
    turn(
        "assistant",
        "Thank you, {first_name}. I can see your order is currently in transit \
         and should arrive by {date}. Would you like me to send you the tracking link?",
    ),
    turn("user", "Yes please!"),
    turn(
        "assistant",
        "I've sent the tracking link to {email}. Is there anything else I can help you with?",
    ),
];

static CODE_ASSISTANT: &[TurnTemplate] = &[
    turn(
        "system",
        "You are an expert Rust developer. Provide clean, well-typed, \
         idiomatic Rust code with brief explanations.",
    ),
    turn("user", "How do I {task} in Rust?"),
    turn(
        "assistant",
        "Here's how to {task} in Rust:\n\n```rust\nfn {function_name}(items: &[String]) \
         -> std::collections::HashMap<&str, usize> {\n    let mut counts = \
         std::collections::HashMap::new();\n    for item in items {\n        \
         *counts.entry(item.as_str()).or_insert(0) += 1;\n    }\n    counts\n}\n```\n\n\
         This builds a frequency map in a single O(n) pass.",
    ),
    turn("user", "What if the slice is very large?"),
    turn(
        "assistant",
        "The single pass is already linear, so it scales well. For very large inputs, \
         reserve capacity up front with `HashMap::with_capacity` to avoid rehashing, \
         or process the slice in parallel chunks and merge the partial maps.",
    ),
];

static RESEARCH_ASSISTANT: &[TurnTemplate] = &[
    turn(
        "system",
        "You are a research assistant. Summarise academic papers accurately, \
         cite sources, and flag uncertainty explicitly.",
    ),
    turn(
        "user",
        "Can you summarise the key findings of the paper titled '{paper_title}'?",
    ),
    turn(
        "assistant",
        "The paper '{paper_title}' (published {year}) reports three main findings: \
         1) {finding_one} 2) {finding_two} 3) {finding_three} The authors conclude \
         that {conclusion} Note: I'm summarising from a truncated abstract — please \
         verify with the full text.",
    ),
    turn("user", "What methodology did they use?"),
    turn(
        "assistant",
        "The study employed a {methodology} design with a sample of {count} participants \
         over {duration}. Data were analysed using {analysis_method}.",
    ),
];

/// Conversation templates keyed by name.
pub static CONVERSATION_TEMPLATES: Lazy<BTreeMap<&'static str, &'static [TurnTemplate]>> =
    Lazy::new(|| {
        let mut map: BTreeMap<&'static str, &'static [TurnTemplate]> = BTreeMap::new();
        map.insert("customer_support", CUSTOMER_SUPPORT);
        map.insert("code_assistant", CODE_ASSISTANT);
        map.insert("research_assistant", RESEARCH_ASSISTANT);
        map
    });

/// A canonical tool definition whose arguments can be synthesized.
#[derive(Debug, Clone)]
pub struct ToolTemplate {
    pub name: &'static str,
    pub description: &'static str,
    /// Parameter schema, parsed once at startup.
    pub parameters: SchemaNode,
}

/// Tool-call templates keyed by short name.
pub static TOOL_TEMPLATES: Lazy<BTreeMap<&'static str, ToolTemplate>> = Lazy::new(|| {
    let mut map = BTreeMap::new();
    map.insert(
        "search",
        ToolTemplate {
            name: "web_search",
            description: "Search the web for current information on a topic.",
            parameters: SchemaNode::parse(&json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "The search query."},
                    "num_results": {
                        "type": "integer",
                        "description": "Number of results to return.",
                        "minimum": 1,
                        "maximum": 50
                    },
                    "safe_search": {"type": "boolean"}
                },
                "required": ["query"]
            }))
            .expect("built-in search schema is valid"),
        },
    );
    map.insert(
        "email",
        ToolTemplate {
            name: "send_email",
            description: "Send an email to one or more recipients.",
            parameters: SchemaNode::parse(&json!({
                "type": "object",
                "properties": {
                    "to": {
                        "type": "array",
                        "items": {"type": "string", "format": "email"},
                        "minItems": 1,
                        "maxItems": 3,
                        "description": "Recipient email addresses."
                    },
                    "subject": {"type": "string"},
                    "body": {"type": "string"},
                    "cc": {
                        "type": "array",
                        "items": {"type": "string", "format": "email"},
                        "minItems": 0,
                        "maxItems": 2
                    }
                },
                "required": ["to", "subject", "body"]
            }))
            .expect("built-in email schema is valid"),
        },
    );
    map.insert(
        "database",
        ToolTemplate {
            name: "execute_query",
            description: "Run a parameterised SQL query against the database.",
            parameters: SchemaNode::parse(&json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Parameterised SQL query."},
                    "params": {
                        "type": "array",
                        "items": {},
                        "description": "Positional parameters for the query."
                    },
                    "database": {"type": "string", "description": "Target database name."}
                },
                "required": ["query"]
            }))
            .expect("built-in database schema is valid"),
        },
    );
    map.insert(
        "file_operations",
        ToolTemplate {
            name: "file_operation",
            description: "Read, write, or list files on the local filesystem.",
            parameters: SchemaNode::parse(&json!({
                "type": "object",
                "properties": {
                    "operation": {
                        "type": "string",
                        "enum": ["read", "write", "list", "delete"]
                    },
                    "path": {"type": "string", "description": "Absolute file path."},
                    "content": {
                        "type": "string",
                        "description": "Content to write (write operation only)."
                    },
                    "encoding": {"type": "string"}
                },
                "required": ["operation", "path"]
            }))
            .expect("built-in file_operations schema is valid"),
        },
    );
    map
});

pub fn conversation_template(name: &str) -> Option<&'static [TurnTemplate]> {
    CONVERSATION_TEMPLATES.get(name).copied()
}

pub fn tool_template(name: &str) -> Option<&'static ToolTemplate> {
    TOOL_TEMPLATES.get(name)
}

/// Tool template keys in stable (sorted) order.
pub fn tool_template_names() -> Vec<&'static str> {
    TOOL_TEMPLATES.keys().copied().collect()
}

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").unwrap());

/// Replace every `{placeholder}` token in `text` with a faker-generated value.
pub fn render<F: ValueFaker>(text: &str, faker: &mut F) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures<'_>| {
            resolve_placeholder(&caps[1], faker)
        })
        .into_owned()
}

fn resolve_placeholder<F: ValueFaker>(name: &str, faker: &mut F) -> String {
    match name {
        "order_id" => faker.digits(6),
        "email" => faker.email(),
        "first_name" => faker.first_name(),
        "last_name" => faker.last_name(),
        "date" => faker.date(),
        "year" => faker.year(),
        "task" => {
            let phrase = faker.sentence(3);
            phrase.trim_end_matches('.').to_lowercase()
        }
        "function_name" => format!("{}_{}", faker.word(), faker.word()),
        "paper_title" => {
            let title = faker.sentence(6);
            title.trim_end_matches('.').to_string()
        }
        "finding_one" | "finding_two" | "finding_three" | "conclusion" => faker.sentence(6),
        "count" => faker.int_range(10, 500).to_string(),
        "methodology" | "duration" | "analysis_method" => faker.word(),
        // Unknown placeholders fall back to a single word.
        _ => faker.word(),
    }
}

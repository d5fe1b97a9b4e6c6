//! Templates command CLI handler.

use crate::templates::{CONVERSATION_TEMPLATES, TOOL_TEMPLATES};

pub fn run(list_all: bool, category: Option<String>) -> anyhow::Result<()> {
    if !list_all && category.is_none() {
        anyhow::bail!("specify --list or --category <conversation|tool_call>");
    }

    let (show_conversation, show_tool_call) = match category.as_deref() {
        None => (true, true),
        Some("conversation") => (true, false),
        Some("tool_call") => (false, true),
        Some(other) => {
            anyhow::bail!("unknown category: {other}. Use conversation or tool_call");
        }
    };

    if show_conversation {
        println!("\n--- Conversation Templates ---");
        for (name, turns) in CONVERSATION_TEMPLATES.iter() {
            println!("  {}  ({} turns)", name, turns.len());
        }
    }

    if show_tool_call {
        println!("\n--- Tool-Call Templates ---");
        for (name, template) in TOOL_TEMPLATES.iter() {
            println!("  {}  -> {}", name, template.name);
        }
    }

    println!();
    Ok(())
}

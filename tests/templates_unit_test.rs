//! Unit tests for the built-in template tables and placeholder rendering.

use datasynth::faker::Faker;
use datasynth::rng::seeded_rng;
use datasynth::schema::SchemaNode;
use datasynth::templates::{
    conversation_template, render, tool_template, tool_template_names,
    CONVERSATION_TEMPLATES, DEFAULT_CONVERSATION_TEMPLATE, DEFAULT_TOOL_TEMPLATE,
    TOOL_TEMPLATES,
};
use rand_chacha::ChaCha8Rng;

fn faker(seed: u64) -> Faker<ChaCha8Rng> {
    Faker::new(seeded_rng(Some(seed)))
}

#[test]
fn test_conversation_table_contents() {
    let names: Vec<&str> = CONVERSATION_TEMPLATES.keys().copied().collect();
    assert_eq!(
        names,
        vec!["code_assistant", "customer_support", "research_assistant"]
    );
    for (name, turns) in CONVERSATION_TEMPLATES.iter() {
        assert!(turns.len() >= 2, "template '{name}' too short");
        assert_eq!(turns[0].role, "system");
        for turn in turns.iter() {
            assert!(matches!(turn.role, "system" | "user" | "assistant"));
            assert!(!turn.content.is_empty());
        }
    }
    assert!(conversation_template(DEFAULT_CONVERSATION_TEMPLATE).is_some());
}

#[test]
fn test_tool_table_contents() {
    let names = tool_template_names();
    assert_eq!(names, vec!["database", "email", "file_operations", "search"]);
    for key in names {
        let template = tool_template(key).unwrap();
        assert!(!template.name.is_empty());
        assert!(!template.description.is_empty());
        assert!(
            matches!(template.parameters, SchemaNode::Object { .. }),
            "parameters of '{key}' must be an object schema"
        );
    }
    assert!(tool_template(DEFAULT_TOOL_TEMPLATE).is_some());
    assert_eq!(TOOL_TEMPLATES.len(), 4);
}

#[test]
fn test_unknown_template_lookups() {
    assert!(conversation_template("no_such_template").is_none());
    assert!(tool_template("no_such_tool").is_none());
}

#[test]
fn test_render_replaces_known_placeholders() {
    let mut fake = faker(1);
    let rendered = render("Order #{order_id} for {email} ships {date}.", &mut fake);
    assert!(!rendered.contains('{'));
    assert!(rendered.contains('@'));
    assert!(rendered.starts_with("Order #"));
}

#[test]
fn test_render_leaves_plain_text_unchanged() {
    let mut fake = faker(1);
    assert_eq!(render("No placeholders here.", &mut fake), "No placeholders here.");
}

#[test]
fn test_render_unknown_placeholder_becomes_word() {
    let mut fake = faker(1);
    let rendered = render("value: {mystery_token}", &mut fake);
    assert!(rendered.starts_with("value: "));
    assert!(!rendered.contains('{'));
    let word = rendered.trim_start_matches("value: ");
    assert!(word.chars().all(|c| c.is_ascii_alphabetic()));
}

#[test]
fn test_render_is_deterministic() {
    let first = render("Dear {first_name}, order {order_id}", &mut faker(9));
    let second = render("Dear {first_name}, order {order_id}", &mut faker(9));
    assert_eq!(first, second);
}

//! Schema command CLI handler: export output-type JSON schemas.

use crate::json_schema;

pub fn run(name: Option<String>, list: bool) -> anyhow::Result<()> {
    if list {
        for name in json_schema::schema_names() {
            println!("{name}");
        }
        return Ok(());
    }

    match name {
        Some(name) => match json_schema::get_schema(&name) {
            Some(schema) => println!("{}", serde_json::to_string_pretty(&schema)?),
            None => anyhow::bail!(
                "unknown schema: {}. Available: {}",
                name,
                json_schema::schema_names().join(", ")
            ),
        },
        None => {
            let all = json_schema::all_schemas();
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
    }

    Ok(())
}

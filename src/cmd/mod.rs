mod generate;
mod schema;
mod templates;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datasynth")]
#[command(version)]
#[command(about = "Generate deterministic synthetic data for agent and LLM tooling tests", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate synthetic data samples and write them as JSON Lines
    Generate {
        /// Kind of data to generate: text, json, conversation, tool_call, agent_trace
        #[arg(short = 't', long = "type")]
        data_type: String,

        /// Number of samples to generate
        #[arg(short, long, default_value_t = 10)]
        count: usize,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output file path (.jsonl). Use '-' for stdout
        #[arg(short, long, default_value = "-")]
        output: String,

        /// Path to a JSON Schema file, .json or .yaml (used with --type json)
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Constraint as KEY=VALUE pair. May be specified multiple times
        #[arg(long = "constraint", value_name = "KEY=VALUE")]
        constraints: Vec<String>,
    },

    /// List available conversation and tool-call templates
    Templates {
        /// List all built-in templates
        #[arg(long = "list")]
        list_all: bool,

        /// Filter templates by category: conversation or tool_call
        #[arg(long)]
        category: Option<String>,
    },

    /// Export JSON schemas for the tool's output types
    Schema {
        /// Schema name to export (all schemas when omitted)
        name: Option<String>,

        /// List available schema names
        #[arg(long)]
        list: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            data_type,
            count,
            seed,
            output,
            schema,
            constraints,
        } => generate::run(data_type, count, seed, output, schema, constraints),
        Commands::Templates { list_all, category } => templates::run(list_all, category),
        Commands::Schema { name, list } => schema::run(name, list),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "datasynth", &mut io::stdout());
            Ok(())
        }
    }
}

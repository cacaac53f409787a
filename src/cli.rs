use clap::{Args, Parser, Subcommand};
use oxidized_skill_lint::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "oxidized-skill-lint",
    version,
    about = "Validate an AI agent skill package against the packaging contract",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub validate: ValidateArgs,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log progress to stderr (-v debug, -vv trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the skill package directory
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate every skill package inside a collection directory
    #[command(name = "validate-all")]
    ValidateAll {
        /// Path to a directory containing multiple skill subdirectories
        path: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check which script interpreters are available
    CheckTools {
        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List all built-in rules
    ListRules,

    /// Show full explanation for a rule
    Explain {
        /// Rule ID (e.g., "name/invalid-shape")
        rule_id: String,
    },
}

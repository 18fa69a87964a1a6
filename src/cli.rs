use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;

use crate::commands::comments::CommentsArgs;
use crate::commands::config::ConfigCommands;

const EXAMPLES: &str = indoc! {r#"
    Examples:
      pr-help-cli instructions
      pr-help-cli assess-instructions
      pr-help-cli fix-instructions
      pr-help-cli prs
      pr-help-cli comments --pr 123
      pr-help-cli comments --pr 123 --after-date 2025-12-01
      pr-help-cli comments --pr 123 --after-time "2025-12-01 14:30:00"
"#};

#[derive(Parser)]
#[command(
    name = "pr-help-cli",
    version,
    about,
    after_help = EXAMPLES,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Get LLM instructions for report generation
    Instructions,

    /// Get LLM instructions for assessing comments and determining needed changes
    AssessInstructions,

    /// Get LLM instructions for implementing fixes based on assessment
    FixInstructions,

    /// List open pull requests
    Prs,

    /// Get unresolved comments for a specific PR
    Comments(CommentsArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub mod comments;
pub mod config;
pub mod instructions;
pub mod prs;

use std::io::Write;

use clap::CommandFactory;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::report;
use crate::shared::command::CommandRunner;
use crate::shared::config::Config;

impl Commands {
    /// Whether the command uses a value from the config file.
    pub fn reads_config(&self) -> bool {
        matches!(self, Self::FixInstructions | Self::Prs | Self::Comments(_))
    }

    pub fn run(
        &self,
        runner: &impl CommandRunner,
        config: &Config,
        out: &mut impl Write,
    ) -> Result<()> {
        match self {
            Self::Instructions => writeln!(out, "{}", instructions::REPORT_INSTRUCTIONS)?,
            Self::AssessInstructions => writeln!(out, "{}", instructions::ASSESS_INSTRUCTIONS)?,
            Self::FixInstructions => writeln!(
                out,
                "{}",
                instructions::fix_instructions(&config.instructions.compile_command)
            )?,
            Self::Prs => out.write_all(&prs::list_open_prs(runner)?)?,
            Self::Comments(args) => report::write_json(out, &comments::run(args, runner)?)?,
            Self::Config(command) => command.run(out)?,
            Self::Completions { shell } => {
                clap_complete::generate(*shell, &mut Cli::command(), "pr-help-cli", out)
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::comments::CommentsArgs;
    use crate::shared::command::test_utils::{MockCommandRunner, MockResponse};
    use crate::shared::config::InstructionsConfig;
    use clap_complete::Shell;
    use rstest::rstest;

    fn run_to_string(command: &Commands, runner: &MockCommandRunner) -> Result<String> {
        let mut out = Vec::new();
        command.run(runner, &Config::default(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prs_forwards_empty_listing_verbatim() {
        let runner =
            MockCommandRunner::new().with_pr_list(MockResponse::Success("[]\n".to_string()));
        assert_eq!(run_to_string(&Commands::Prs, &runner).unwrap(), "[]\n");
    }

    #[test]
    fn comments_with_no_unresolved_threads_prints_empty_array() {
        let runner = MockCommandRunner::new();
        let command = Commands::Comments(CommentsArgs {
            pr: Some("9".to_string()),
            ..CommentsArgs::default()
        });

        assert_eq!(run_to_string(&command, &runner).unwrap(), "[]\n");
    }

    #[test]
    fn comments_prints_records_as_json_array() {
        let runner = MockCommandRunner::new().with_graphql(MockResponse::Success(
            r#"{"data":{"repository":{"pullRequest":{"reviewThreads":{
                "pageInfo":{"hasNextPage":false},
                "nodes":[{"isResolved":false,"comments":{"nodes":[{
                    "author":{"login":"octocat"},"body":"nit","path":"README.md",
                    "line":3,"createdAt":"2025-04-01T08:00:00Z"
                }]}}]
            }}}}}"#
                .to_string(),
        ));
        let command = Commands::Comments(CommentsArgs {
            pr: Some("9".to_string()),
            ..CommentsArgs::default()
        });

        let output = run_to_string(&command, &runner).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            serde_json::json!([{
                "file": "README.md",
                "line": 3,
                "author": "octocat",
                "comment": "nit",
                "createdAt": "2025-04-01T08:00:00Z"
            }])
        );
    }

    #[test]
    fn failing_command_writes_nothing() {
        let runner =
            MockCommandRunner::new().with_pr_list(MockResponse::Failure("boom".to_string()));
        let mut out = Vec::new();

        let result = Commands::Prs.run(&runner, &Config::default(), &mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn instructions_do_not_call_gh() {
        let runner = MockCommandRunner::new();

        let output = run_to_string(&Commands::Instructions, &runner).unwrap();

        assert!(output.starts_with("LLM Instructions for PR Report Generation"));
        assert!(runner.recorded_calls().is_empty());
    }

    #[test]
    fn fix_instructions_use_configured_compile_command() {
        let config = Config {
            instructions: InstructionsConfig {
                compile_command: "cargo test".to_string(),
            },
            ..Config::default()
        };
        let mut out = Vec::new();

        Commands::FixInstructions
            .run(&MockCommandRunner::new(), &config, &mut out)
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("cargo test"));
        assert!(!output.contains("gradlew"));
    }

    #[rstest]
    #[case::fix(Commands::FixInstructions, true)]
    #[case::prs(Commands::Prs, true)]
    #[case::comments(Commands::Comments(CommentsArgs::default()), true)]
    #[case::instructions(Commands::Instructions, false)]
    #[case::assess(Commands::AssessInstructions, false)]
    #[case::completions(Commands::Completions { shell: Shell::Zsh }, false)]
    fn only_commands_using_config_values_read_it(
        #[case] command: Commands,
        #[case] expected: bool,
    ) {
        assert_eq!(command.reads_config(), expected);
    }

    #[test]
    fn completions_mention_subcommands() {
        let output = run_to_string(
            &Commands::Completions { shell: Shell::Bash },
            &MockCommandRunner::new(),
        )
        .unwrap();
        assert!(output.contains("assess-instructions"));
    }
}

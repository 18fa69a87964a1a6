use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::shared::env_var::EnvVars;

const DEFAULT_FILTER: &str = "warn";

fn filter(env: &EnvVars) -> EnvFilter {
    env.log
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Logs go to stderr; stdout carries JSON only.
pub fn init(env: &EnvVars) {
    let registry = tracing_subscriber::registry().with(filter(env));

    if env.json_logs() {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_warn() {
        assert_eq!(filter(&EnvVars::default()).to_string(), "warn");
    }

    #[test]
    fn env_directives_are_used() {
        let env = EnvVars {
            log: Some("pr_help_cli=debug".to_string()),
            ..EnvVars::default()
        };
        assert_eq!(filter(&env).to_string(), "pr_help_cli=debug");
    }

    #[test]
    fn invalid_directives_fall_back_to_default() {
        let env = EnvVars {
            log: Some("pr_help_cli=loud".to_string()),
            ..EnvVars::default()
        };
        assert_eq!(filter(&env).to_string(), "warn");
    }
}

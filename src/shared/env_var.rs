//! Centralized reader for PR_HELP_* environment variables.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const GH: &str = "PR_HELP_GH";
const LOG: &str = "PR_HELP_LOG";
const LOG_FORMAT: &str = "PR_HELP_LOG_FORMAT";

/// Snapshot of all PR_HELP_* environment variables at load time.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EnvVars {
    /// Overrides `gh.command` from the config file.
    pub gh: Option<String>,

    /// `tracing_subscriber::EnvFilter` directives (default: warn).
    pub log: Option<String>,

    /// "json" for structured log lines, anything else for plain text.
    pub log_format: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all PR_HELP_* environment variables from the current process.
    pub fn load() -> Self {
        Self {
            gh: non_empty_var(GH),
            log: non_empty_var(LOG),
            log_format: non_empty_var(LOG_FORMAT),
        }
    }

    pub fn json_logs(&self) -> bool {
        self.log_format
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_all_variables() {
        temp_env::with_vars(
            [
                (GH, Some("/opt/gh/bin/gh")),
                (LOG, Some("debug")),
                (LOG_FORMAT, Some("JSON")),
            ],
            || {
                let vars = EnvVars::load();
                assert_eq!(vars.gh.as_deref(), Some("/opt/gh/bin/gh"));
                assert_eq!(vars.log.as_deref(), Some("debug"));
                assert!(vars.json_logs());
            },
        );
    }

    #[test]
    fn empty_values_are_treated_as_unset() {
        temp_env::with_vars(
            [(GH, Some("")), (LOG, Some("")), (LOG_FORMAT, None::<&str>)],
            || {
                assert_eq!(EnvVars::load(), EnvVars::default());
            },
        );
    }

    #[test]
    fn plain_log_format_is_not_json() {
        temp_env::with_var(LOG_FORMAT, Some("plain"), || {
            assert!(!EnvVars::load().json_logs());
        });
    }
}

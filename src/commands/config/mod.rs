use std::io::Write;

use clap::Subcommand;

use crate::error::Result;
use crate::shared::config::generate_schema;

/// Configuration management commands.
#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print JSON Schema for the configuration file
    Schema,
}

impl ConfigCommands {
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        match self {
            Self::Schema => {
                serde_json::to_writer_pretty(&mut *out, &generate_schema())?;
                writeln!(out)?;
                Ok(())
            }
        }
    }
}

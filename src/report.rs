use std::io::Write;

use serde::Serialize;

use crate::error::{PrHelpError, Result};

/// JSON object printed on stdout when a command fails.
#[derive(Debug, Serialize)]
pub struct ErrorReport<'a> {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'a str>,
}

impl<'a> From<&'a PrHelpError> for ErrorReport<'a> {
    fn from(err: &'a PrHelpError) -> Self {
        Self {
            error: err.to_string(),
            details: err.details(),
        }
    }
}

pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_error(out: &mut impl Write, err: &PrHelpError) -> Result<()> {
    write_json(out, &ErrorReport::from(err))
}

//! Parsing of EOS MGM command responses.
//!
//! An MGM reply is a single `&`-delimited blob:
//!
//! ```text
//! mgm.proc.stdout=<output>&mgm.proc.stderr=<errors>&mgm.proc.retc=<code>
//! ```
//!
//! Each field appears at most once and its value runs until the next `&` or
//! the end of the blob. Field order is not guaranteed.

use crate::error::BackendError;

pub const STDOUT_KEY: &str = "mgm.proc.stdout=";
pub const STDERR_KEY: &str = "mgm.proc.stderr=";
pub const RETC_KEY: &str = "mgm.proc.retc=";

/// Borrowed view over the raw fields of one command response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandResponse<'a> {
    raw: &'a str,
    pub stdout: Option<&'a str>,
    pub stderr: Option<&'a str>,
    pub retc: Option<&'a str>,
}

impl<'a> CommandResponse<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            stdout: field_value(raw, STDOUT_KEY),
            stderr: field_value(raw, STDERR_KEY),
            retc: field_value(raw, RETC_KEY),
        }
    }

    /// Numeric return code, when `mgm.proc.retc` is present and parses.
    pub fn return_code(&self) -> Option<i32> {
        self.retc.and_then(|raw| raw.trim().parse().ok())
    }

    /// Resolve the command output.
    ///
    /// A non-empty stderr always wins over stdout. A blob with neither field
    /// is treated as already-extracted output and returned whole.
    pub fn into_output(self) -> Result<String, BackendError> {
        if let Some(error) = self.stderr.filter(|value| !value.is_empty()) {
            return Err(BackendError::Server(error.to_string()));
        }

        match self.stdout {
            Some(output) => Ok(output.to_string()),
            None => Ok(self.raw.to_string()),
        }
    }
}

/// Extract the output of an EOS command from its full response.
///
/// Fails with [`BackendError::Server`] when the response carries a non-empty
/// `mgm.proc.stderr` field, even if stdout is present too.
pub fn extract_cmd_output(response: &str) -> Result<String, BackendError> {
    log::debug!("Extracting output from command response: {response}");
    CommandResponse::parse(response).into_output()
}

fn field_value<'a>(response: &'a str, key: &str) -> Option<&'a str> {
    let start = response.find(key)? + key.len();
    let rest = &response[start..];
    let end = rest.find('&').unwrap_or(rest.len());
    Some(&rest[..end])
}

// src/cmdline.rs

//! Command-line composition.
//!
//! The target path and its arguments are joined into a single string, each
//! token followed by one space separator, capped at [`MAX_COMMAND_LINE`]
//! characters. The cap counts every token plus its separator and is enforced
//! before any process is spawned.

use anyhow::{anyhow, Result};

use crate::errors::{SIZE_EXCEEDED, USAGE};

/// Maximum length of the composed command line, separators included.
pub const MAX_COMMAND_LINE: usize = 1000;

/// Join the raw CLI tokens (target path first) into the echoed command line.
///
/// Fails if no target was given or if the composed line would exceed
/// [`MAX_COMMAND_LINE`]. The error messages double as the one-line
/// diagnostics `main` prints to stdout on the hard-failure paths.
pub fn compose(tokens: &[String]) -> Result<String> {
    if tokens.is_empty() {
        return Err(anyhow!(USAGE));
    }

    let mut line = String::new();
    for token in tokens {
        if line.len() + token.len() + 1 > MAX_COMMAND_LINE {
            return Err(anyhow!(SIZE_EXCEEDED));
        }
        line.push_str(token);
        line.push(' ');
    }

    Ok(line)
}

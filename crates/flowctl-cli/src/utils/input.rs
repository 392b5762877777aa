//! User input utilities for interactive command-line prompts.
//!
//! Prompts are written to stderr so stdout carries nothing but command
//! output, even when a confirmation interrupts a piped invocation.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};

/// Writes `prompt` to `output` and reads one trimmed line from `input`.
///
/// # Errors
///
/// Returns an error if either stream fails or `input` is already closed.
fn prompt_string_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{prompt}: ").context("Failed to write prompt")?;
    output.flush().context("Failed to write prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read user input")?;
    if read == 0 {
        bail!("standard input closed before an answer was given");
    }

    Ok(line.trim().to_string())
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    prompt_confirmation_from(&mut io::stdin().lock(), &mut io::stderr(), prompt)
}

/// [`prompt_confirmation`] over explicit streams.
pub fn prompt_confirmation_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<bool> {
    loop {
        let answer = prompt_string_from(input, output, &format!("{prompt} (y/N)"))?;
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => {
                writeln!(output, "Please enter 'y' for yes or 'n' for no.")
                    .context("Failed to write prompt")?;
            }
        }
    }
}

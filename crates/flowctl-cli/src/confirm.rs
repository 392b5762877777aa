//! Terminal implementation of the confirmation port.

use flowctl_core::{ConfirmationPrompt, Confirmer};

use crate::utils::input::prompt_confirmation;

/// Asks on the terminal before a mutating cmdlet runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &ConfirmationPrompt) -> Result<bool, String> {
        eprintln!("{}", prompt.message());
        prompt_confirmation("Are you sure you want to perform this action?")
            .map_err(|e| format!("{e:#}"))
    }
}

//! Confirmation port for mutating operations.

/// What the user is asked to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub cmdlet: String,
    pub operation: &'static str,
    /// Rendered identifiers of the affected resource(s).
    pub target: String,
}

impl ConfirmationPrompt {
    /// Single-line summary shown before asking.
    pub fn message(&self) -> String {
        format!(
            "Performing the operation \"{} ({})\" on target \"{}\".",
            self.operation, self.cmdlet, self.target
        )
    }
}

/// Asks the user whether a mutating operation may proceed.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer: Send + Sync {
    /// `Ok(false)` means the user declined; `Err` means asking failed.
    fn confirm(&self, prompt: &ConfirmationPrompt) -> Result<bool, String>;
}

/// Confirmer that approves everything (for non-interactive callers that
/// already decided, e.g. `--Force` equivalents in library use).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirmer for AlwaysConfirm {
    fn confirm(&self, _prompt: &ConfirmationPrompt) -> Result<bool, String> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_message() {
        let prompt = ConfirmationPrompt {
            cmdlet: "Remove-AFFlow".into(),
            operation: "DeleteFlow",
            target: "nightly-sync".into(),
        };
        assert_eq!(
            prompt.message(),
            "Performing the operation \"DeleteFlow (Remove-AFFlow)\" on target \"nightly-sync\"."
        );
    }
}

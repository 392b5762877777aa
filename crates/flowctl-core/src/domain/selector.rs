//! Output selection rules.

use std::fmt;
use std::str::FromStr;

/// Determines which part of an invocation becomes the command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `*`: the whole response body.
    Whole,
    /// A top-level response field, matched case-insensitively.
    Field(String),
    /// `^Name`: echo the value the caller bound to an input parameter.
    Param(String),
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "*" {
            return Ok(Self::Whole);
        }
        if let Some(param) = s.strip_prefix('^') {
            let param = param.trim();
            if param.is_empty() {
                return Err("'^' must be followed by a parameter name".to_string());
            }
            return Ok(Self::Param(param.to_string()));
        }
        if s.is_empty() {
            return Err("selector cannot be empty".to_string());
        }
        Ok(Self::Field(s.to_string()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole => f.write_str("*"),
            Self::Field(name) => f.write_str(name),
            Self::Param(name) => write!(f, "^{name}"),
        }
    }
}

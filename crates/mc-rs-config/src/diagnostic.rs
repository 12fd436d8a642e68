//! Problems found while turning config sections into typed values.
//!
//! Parsers never abort on bad input. They record a [`Diagnostic`] (which is
//! also logged) and either skip the entry or give up on the whole object,
//! returning both through [`Parsed`].

use std::fmt;

use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The entry or object was skipped; the rest of the config is usable.
    Warning,
    /// A required value is missing or invalid.
    Severe,
}

/// A single problem at a config path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Dotted path of the section the problem was found in.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} at {}", self.message, self.path)
        }
    }
}

/// A parse result together with everything that went wrong building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Parsed<T> {
    /// True if nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }
}

/// Collects diagnostics and forwards each one to the log as it is recorded.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn warn(&mut self, path: &str, message: impl Into<String>) {
        self.push(Severity::Warning, path, message.into());
    }

    pub fn severe(&mut self, path: &str, message: impl Into<String>) {
        self.push(Severity::Severe, path, message.into());
    }

    pub fn finish<T>(self, value: T) -> Parsed<T> {
        Parsed {
            value,
            diagnostics: self.entries,
        }
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }

    fn push(&mut self, severity: Severity, path: &str, message: String) {
        let diagnostic = Diagnostic {
            severity,
            path: path.to_string(),
            message,
        };
        match severity {
            Severity::Warning => warn!("{diagnostic}"),
            Severity::Severe => error!("{diagnostic}"),
        }
        self.entries.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_and_without_path() {
        let mut diags = Diagnostics::default();
        diags.warn("zones.spawn", "Found no area type");
        diags.severe("", "Tried to parse area on null section");
        let parsed = diags.finish(());
        assert_eq!(parsed.diagnostics.len(), 2);
        assert_eq!(
            parsed.diagnostics[0].to_string(),
            "Found no area type at zones.spawn"
        );
        assert_eq!(parsed.diagnostics[1].severity, Severity::Severe);
        assert_eq!(
            parsed.diagnostics[1].to_string(),
            "Tried to parse area on null section"
        );
    }

    #[test]
    fn map_keeps_diagnostics() {
        let mut diags = Diagnostics::default();
        diags.warn("a", "oops");
        let parsed = diags.finish(2).map(|n| n * 10);
        assert_eq!(parsed.value, 20);
        assert!(!parsed.is_clean());
    }
}

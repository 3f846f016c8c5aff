//! Configuration errors
//!
//! All physics in this crate is total over its defaulted domain, so the only
//! fallible surface is engine configuration. Bad construction parameters fail
//! fast here instead of silently defaulting.

use thiserror::Error;

/// Errors raised while building an [`Engine`](crate::simulation::Engine).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The medium key did not name a known fluid.
    #[error("unknown fluid medium `{0}` (expected \"air\" or \"water\")")]
    UnknownMedium(String),

    /// The bubble size budget cannot produce a radius in the valid range.
    ///
    /// Radii are drawn from [3.5, budget/2] pixels, so any budget below 7
    /// pixels is unsatisfiable.
    #[error("bubble size budget {0} px is below the 7 px minimum")]
    InvalidSizeBudget(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_medium_names_the_key() {
        let err = ConfigError::UnknownMedium("plasma".to_string());
        assert!(err.to_string().contains("plasma"));
    }
}

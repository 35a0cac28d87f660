//! Error taxonomy.
//!
//! Two classes, both caller-facing:
//!
//! - [`Error::InvalidConfiguration`]: fatal at construction time. A zero
//!   pair count or an empty level table can never produce a playable
//!   board, so deck/session creation is refused outright.
//! - [`Error::Misuse`]: a call-order precondition was violated (selecting
//!   an out-of-range or already-resolved slot, driving a game with no
//!   staged level). Operations are deterministic, so there is no retry
//!   policy; the orchestrating caller is expected to uphold these.
//!
//! Nothing here is ever swallowed: unlimited attempt/time sentinels are
//! explicit enum variants ([`crate::core::AttemptBudget`],
//! [`crate::core::TimeBudget`]), not inferred special cases.

use thiserror::Error;

/// Engine error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Configuration can never produce a playable board or session.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the configuration.
        reason: String,
    },

    /// A caller broke a call-order precondition.
    #[error("misuse: {reason}")]
    Misuse {
        /// Which precondition was violated.
        reason: String,
    },
}

impl Error {
    /// Build an `InvalidConfiguration` error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Build a `Misuse` error.
    pub fn misuse(reason: impl Into<String>) -> Self {
        Self::Misuse {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let err = Error::invalid_configuration("pair count must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration: pair count must be positive"
        );

        let err = Error::misuse("slot 9 already matched");
        assert_eq!(err.to_string(), "misuse: slot 9 already matched");
    }
}

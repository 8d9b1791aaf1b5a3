//! Error types for the Enigma engine.

use thiserror::Error;

/// Errors produced by the Enigma engine.
///
/// Every variant is a rejected-input error: the engine validates all inputs
/// before touching machine state, so a returned error guarantees the machine
/// is observably unchanged. There are no transient or retryable failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EnigmaError {
    /// Rotor model id is outside the supported range [1, 5].
    #[error("rotor model must be in 1..=5, got {0}")]
    InvalidRotorModel(u8),
    /// Rotor position is outside the alphabet range [0, 25].
    #[error("rotor position must be in 0..=25, got {0}")]
    InvalidRotorPosition(u8),
    /// Rotor slot is not 1, 2, or 3.
    #[error("rotor slot must be 1, 2, or 3, got {0}")]
    InvalidSlot(u8),
    /// Symbol is outside the alphabet range [0, 25].
    #[error("symbol must be in 0..=25, got {0}")]
    InvalidSymbol(u8),
    /// A plugboard cable cannot connect a symbol to itself.
    #[error("cannot plug symbol {0} to itself")]
    SelfPlug(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EnigmaError::InvalidRotorModel(7).to_string(),
            "rotor model must be in 1..=5, got 7"
        );
        assert_eq!(
            EnigmaError::InvalidRotorPosition(26).to_string(),
            "rotor position must be in 0..=25, got 26"
        );
        assert_eq!(
            EnigmaError::InvalidSlot(0).to_string(),
            "rotor slot must be 1, 2, or 3, got 0"
        );
        assert_eq!(
            EnigmaError::InvalidSymbol(99).to_string(),
            "symbol must be in 0..=25, got 99"
        );
        assert_eq!(
            EnigmaError::SelfPlug(4).to_string(),
            "cannot plug symbol 4 to itself"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<EnigmaError>();
    }
}

//! Error types shared by the pattern exercises.

use thiserror::Error;

/// Contract violations raised by the exercises.
///
/// Neither kind is transient; callers propagate them to the process boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// An abstract operation was invoked without an overriding implementation
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// The operation is forbidden (unknown variant tag, duplicating a singleton, ...)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl PatternError {
    /// Shorthand for [`PatternError::InvalidOperation`]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidOperation(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_message_names_operation() {
        // テスト項目: NotImplemented のメッセージに操作名が含まれる
        // given (前提条件):
        let error = PatternError::NotImplemented("ShippingCompany::calculate");

        // when (操作):
        let message = error.to_string();

        // then (期待する結果):
        assert_eq!(message, "ShippingCompany::calculate is not implemented");
    }

    #[test]
    fn test_invalid_shorthand_builds_invalid_operation() {
        // テスト項目: invalid() が InvalidOperation を生成する
        // given (前提条件):
        let reason = "Unknown shipping method";

        // when (操作):
        let error = PatternError::invalid(reason);

        // then (期待する結果):
        assert_eq!(error, PatternError::InvalidOperation(reason.to_string()));
        assert_eq!(error.to_string(), "Invalid operation: Unknown shipping method");
    }
}

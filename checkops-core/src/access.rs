//! Operations gated on caller state

use crate::error::{rejected, OpError, Result};

/// Confirmation returned once an authenticated caller is admitted
pub const SECURE_OPERATION_CONFIRMATION: &str = "User logged in.";

/// Run the secure operation for an authenticated caller
///
/// Signals [`InvalidOperation`](crate::ErrorKind::InvalidOperation) when
/// `is_authenticated` is false.
pub fn perform_secure_operation(is_authenticated: bool) -> Result<&'static str> {
    if !is_authenticated {
        let err = OpError::InvalidOperation {
            reason: "user is not logged in",
        };
        return Err(rejected("perform_secure_operation")(err));
    }

    Ok(SECURE_OPERATION_CONFIRMATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_authenticated() {
        assert_eq!(perform_secure_operation(true), Ok("User logged in."));
    }

    #[test]
    fn test_not_authenticated() {
        let err = perform_secure_operation(false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        assert_eq!(err.to_string(), "operation not permitted: user is not logged in");
    }
}

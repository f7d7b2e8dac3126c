//! Message schema errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    /// An inbound message failed schema validation.
    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_display() {
        let err = ProtocolError::InvalidMessage("unknown action".to_string());
        assert!(err.to_string().contains("unknown action"));
    }
}

//! Response Bodies
//!
//! Success bodies shared by every context.

use serde::Serialize;

/// Confirmation body returned by mutating endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_message_object() {
        let body = serde_json::to_value(MessageResponse::new("Review added")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Review added"}));
    }
}

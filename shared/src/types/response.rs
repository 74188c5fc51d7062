//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Standard API response envelope
///
/// Every endpoint answers with this shape: `success` plus either `data`
/// (with `count` on list responses) or a human-readable `message`. Some
/// responses carry both `data` and `message` (e.g. resource creation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable message (errors, confirmations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Number of items (present on list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: None,
        }
    }

    /// Create a successful response with data and a confirmation message
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            count: None,
        }
    }

    /// Create a successful message-only response (e.g. after a delete)
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Create a successful list response with its item count
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            data: Some(items),
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_shape() {
        let response = ApiResponse::success(42);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json.get("message").is_none());
        assert!(json.get("count").is_none());
    }

    #[test]
    fn test_list_response_carries_count() {
        let response = ApiResponse::list(vec!["a", "b", "c"]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_error_response_shape() {
        let response: ApiResponse<()> = ApiResponse::error("Invalid credentials");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid credentials");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_message_only_response() {
        let response: ApiResponse<()> = ApiResponse::message("Car deleted successfully");
        assert!(response.is_success());
        assert!(response.into_data().is_none());
    }
}

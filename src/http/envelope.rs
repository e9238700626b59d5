//! The uniform result envelope returned by every network call.

use serde::{Deserialize, Serialize};

use crate::http::error::ClientError;

/// `{success, data?, error?}`.
///
/// `success == true` implies `data` is present and `error` is absent;
/// `success == false` implies the opposite. The constructors are the only
/// way the crate builds one, so the pairing always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Transform the payload, passing failures through unchanged.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
        }
    }

    /// Convert to a `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (_, _) => Err(self.error.unwrap_or_else(|| "Unknown error".to_string())),
        }
    }
}

impl<T> From<Result<T, ClientError>> for ApiResponse<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(data) => ApiResponse::ok(data),
            Err(e) => ApiResponse::err(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_passes_failures_through() {
        let failed: ApiResponse<u32> = ApiResponse::err("boom");
        let mapped = failed.map(|n| n * 2);
        assert!(!mapped.success);
        assert_eq!(mapped.error.as_deref(), Some("boom"));
        assert!(mapped.data.is_none());

        let ok = ApiResponse::ok(21).map(|n| n * 2);
        assert_eq!(ok.data, Some(42));
    }

    #[test]
    fn test_serialized_shape() {
        let ok = serde_json::to_value(ApiResponse::ok("x")).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": "x"}));

        let failed = serde_json::to_value(ApiResponse::<()>::err("Not found")).unwrap();
        assert_eq!(
            failed,
            serde_json::json!({"success": false, "error": "Not found"})
        );
    }

    #[test]
    fn test_from_client_error() {
        let response = ApiResponse::from(Err::<(), _>(ClientError::Http {
            status: 404,
            message: "Not found".into(),
        }));
        assert_eq!(response, ApiResponse::err("Not found"));

        let response =
            ApiResponse::from(Err::<(), _>(ClientError::Network("connection refused".into())));
        assert_eq!(
            response.into_result().unwrap_err(),
            "Network error: connection refused"
        );
    }
}

//! Validated JSON extractor
//!
//! Deserializes JSON request bodies and runs the `validator` rules on them
//! before the handler sees the value.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Validated JSON extractor
///
/// The inner type must implement both `Deserialize` and `Validate`. A body
/// that fails to deserialize rejects with `invalidBody`; one that
/// deserializes but breaks a validation rule rejects with `validationError`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| match e {
            JsonRejection::JsonDataError(e) => ApiError::invalid_body(e.to_string()),
            JsonRejection::JsonSyntaxError(e) => ApiError::invalid_body(e.to_string()),
            JsonRejection::MissingJsonContentType(e) => ApiError::invalid_body(e.to_string()),
            JsonRejection::BytesRejection(e) => ApiError::invalid_body(e.to_string()),
            _ => ApiError::invalid_body("Invalid JSON body"),
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1))]
        name: String,
    }

    fn json_request(body: &'static str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_extracts() {
        let ValidatedJson(payload) =
            ValidatedJson::<Payload>::from_request(json_request(r#"{"name":"ok"}"#), &())
                .await
                .unwrap();
        assert_eq!(payload.name, "ok");
    }

    #[tokio::test]
    async fn test_malformed_body_reports_body_error() {
        let err = ValidatedJson::<Payload>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "invalidBody");
        assert!(err.to_string().starts_with("Invalid request body:"));
    }

    #[tokio::test]
    async fn test_wrong_shape_reports_body_error() {
        let err = ValidatedJson::<Payload>::from_request(json_request(r#"{"name":42}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "invalidBody");
    }

    #[tokio::test]
    async fn test_failed_validation_reports_validation_error() {
        let err = ValidatedJson::<Payload>::from_request(json_request(r#"{"name":""}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "validationError");
    }
}

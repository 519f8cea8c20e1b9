use serde_json::{Value, json};
use vercel_runtime::{Body, Response, StatusCode};

use crate::error::AppError;

pub fn error_response(err: &AppError) -> (StatusCode, Value) {
    match err {
        AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, json!({"error":"Method not allowed"})),
        AppError::InvalidPayload => (StatusCode::BAD_REQUEST, json!({"error":"Invalid payload"})),
        AppError::MissingCredential(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error":"Server misconfigured","details":err.to_string()}),
        ),
        AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error":"OpenAI error","details":msg})),
        AppError::Http(e) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error":"Server error","details":e.to_string()})),
        AppError::Json(e) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error":"Server error","details":e.to_string()})),
        AppError::Other(e) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error":"Server error","details":e.to_string()})),
    }
}

pub fn json_response<T: serde::Serialize>(status: StatusCode, value: &T) -> anyhow::Result<Response<Body>> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(value)?.into())?)
}

/// 405 carries an `Allow` header listing the methods the function answers.
pub fn method_not_allowed() -> anyhow::Result<Response<Body>> {
    let (status, body) = error_response(&AppError::MethodNotAllowed);
    Ok(Response::builder()
        .status(status)
        .header("Allow", "POST, GET, OPTIONS")
        .header("Content-Type", "application/json")
        .body(body.to_string().into())?)
}

pub fn no_content() -> anyhow::Result<Response<Body>> {
    Ok(Response::builder().status(StatusCode::NO_CONTENT).body(Body::Empty)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_carries_details() {
        let (status, body) = error_response(&AppError::Upstream("quota exceeded".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error":"OpenAI error","details":"quota exceeded"}));
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let (status, body) = error_response(&AppError::MissingCredential("OPENAI_API_KEY"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["details"], "OPENAI_API_KEY is not set");
    }

    #[test]
    fn payload_errors_are_bad_requests() {
        let (status, body) = error_response(&AppError::InvalidPayload);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("details").is_none());
    }
}

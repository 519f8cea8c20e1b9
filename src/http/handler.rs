use serde::Serialize;
use serde_json::json;
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use super::response::{error_response, json_response, method_not_allowed, no_content};
use crate::services::chat_relay::ChatRelay;

pub const HEALTH_MESSAGE: &str = "Use POST /api/chat";

#[derive(Serialize)]
struct ChatReply {
    reply: String,
}

/// Entry point for every request the function receives. Always answers with
/// CORS headers; failures on the POST path become JSON error bodies.
pub async fn handle(relay: &ChatRelay, req: Request) -> Result<Response<Body>, Error> {
    let origin = req
        .headers()
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let resp = match req.method().as_str() {
        "OPTIONS" => no_content()?,
        "GET" => json_response(StatusCode::OK, &json!({"ok": true, "message": HEALTH_MESSAGE}))?,
        "POST" => match relay.create_reply(req.body()).await {
            Ok(reply) => json_response(StatusCode::OK, &ChatReply { reply })?,
            Err(err) => {
                let (status, body) = error_response(&err);
                if status.is_server_error() {
                    tracing::error!(error = %err, "chat request failed");
                }
                json_response(status, &body)?
            }
        },
        _ => method_not_allowed()?,
    };

    Ok(relay.config().cors.apply(resp, origin.as_deref()))
}

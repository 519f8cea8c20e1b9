use chat_relay_api::{ChatRelay, RelayConfig, http::handler::handle, telemetry};
use once_cell::sync::OnceCell;
use vercel_runtime::{run, Body, Error, Request, Response};

// Built on first invocation and reused while the instance stays warm.
static RELAY: OnceCell<ChatRelay> = OnceCell::new();

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    telemetry::init();
    run(handler).await
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let relay = RELAY.get_or_try_init(|| ChatRelay::new(RelayConfig::from_env()))?;
    handle(relay, req).await
}

use vercel_runtime::{Body, Response};

const ALLOW_METHODS: &str = "POST, GET, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";
const MAX_AGE: &str = "86400";

/// How `Access-Control-Allow-Origin` is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorsPolicy {
    /// Always `*`.
    #[default]
    AnyOrigin,
    /// Echo the request's `Origin` back and add `Vary: Origin`.
    EchoOrigin,
}

impl CorsPolicy {
    /// Unknown values fall back to [`CorsPolicy::AnyOrigin`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "echo" | "origin" => CorsPolicy::EchoOrigin,
            _ => CorsPolicy::AnyOrigin,
        }
    }

    pub fn apply(&self, mut resp: Response<Body>, origin: Option<&str>) -> Response<Body> {
        let allow_origin = match (self, origin) {
            (CorsPolicy::EchoOrigin, Some(o)) if !o.is_empty() => o,
            _ => "*",
        };
        let h = resp.headers_mut();
        let pairs: [(&'static str, &str); 4] = [
            ("access-control-allow-origin", allow_origin),
            ("access-control-allow-methods", ALLOW_METHODS),
            ("access-control-allow-headers", ALLOW_HEADERS),
            ("access-control-max-age", MAX_AGE),
        ];
        for (name, value) in pairs {
            match value.parse() {
                Ok(v) => {
                    h.insert(name, v);
                }
                Err(_) => tracing::warn!(header = name, "dropping unrepresentable CORS header value"),
            }
        }
        if *self == CorsPolicy::EchoOrigin {
            if let Ok(v) = "Origin".parse() {
                h.insert("vary", v);
            }
        }
        resp
    }
}

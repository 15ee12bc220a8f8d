//! Client identification for rate-limit partitioning
//!
//! Derives the counter partition key from request metadata: the first
//! forwarded-for address, then the real-ip header, then the stable user
//! cookie, then a freshly generated anonymous token. Never fails.

use actix_web::HttpRequest;
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Forwarded client chain header; the first entry is the client
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Single-address client header set by edge proxies
const REAL_IP_HEADER: &str = "x-real-ip";

/// Derive the rate-limit partition key for a request
///
/// `user_cookie` names the cookie carrying the opaque per-user identifier;
/// its value is tagged `user:` so it cannot collide with raw IPs. When no
/// identity can be read from the request, a fresh `anon:` token is generated
/// rather than pooling all anonymous callers under one shared key.
pub fn identify(req: &HttpRequest, user_cookie: &str) -> String {
    if let Some(forwarded) = header_str(req, FORWARDED_FOR_HEADER) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = header_str(req, REAL_IP_HEADER) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }

    if let Some(cookie) = req.cookie(user_cookie) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return format!("user:{}", value);
        }
    }

    anonymous_identifier()
}

/// Generate a fresh anonymous partition key
pub fn anonymous_identifier() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("anon:{}-{}", Utc::now().timestamp_millis(), suffix)
}

fn header_str<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

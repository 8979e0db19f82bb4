//! Lambda proxy event adapter.
//!
//! The only module that knows what the hosting platform's event looks like.
//! Supports both API Gateway payload formats (v2 `rawPath` /
//! `requestContext.http.method` and v1 `path` / `httpMethod`).

use serde_json::Value;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Request path, with any trailing slash trimmed.
pub fn request_path(payload: &Value) -> &str {
    let path = v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
        .unwrap_or("/");
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// HTTP method, uppercase.
pub fn request_method(payload: &Value) -> String {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .unwrap_or("GET")
        .to_ascii_uppercase()
}

/// Raw request body; the empty string when absent.
pub fn request_body(payload: &Value) -> &str {
    v_str(payload, &["body"]).unwrap_or("")
}

/// Looks up a query-string parameter, preferring the decoded map and falling
/// back to scanning `rawQueryString`.
pub fn query_param<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(value) = v_str(payload, &["queryStringParameters", name]) {
        return Some(value);
    }
    v_str(payload, &["rawQueryString"]).and_then(|query| {
        query.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            if key == name { Some(value) } else { None }
        })
    })
}

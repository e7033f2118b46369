//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{HeaderMap, Method, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::Error;

/// The number of bytes of a request or response body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Form fields whose values must never be written to the logs.
const REDACTED_FIELDS: [&str; 1] = ["code"];

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
/// Verification codes in form submissions are redacted.
///
/// Only text, form and JSON bodies are read and logged. Other bodies, such
/// as images served from the static directory, are forwarded untouched.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    let request = if is_textual(&parts.headers) {
        let bytes = match read_body(body).await {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::error!("could not read request body: {error}");
                return error.into_response();
            }
        };
        let body_text = String::from_utf8_lossy(&bytes);

        if parts.method == Method::POST && is_form(&parts.headers) {
            let display_text = REDACTED_FIELDS
                .iter()
                .fold(body_text.to_string(), |text, field| redact_field(&text, field));
            log_request(&parts, &display_text);
        } else {
            log_request(&parts, &body_text);
        }

        Request::from_parts(parts, Body::from(bytes))
    } else {
        log_request(&parts, NON_TEXT_BODY);
        Request::from_parts(parts, body)
    };

    let response = next.run(request).await;
    let (parts, body) = response.into_parts();

    if !is_textual(&parts.headers) {
        log_response(&parts, NON_TEXT_BODY);
        return Response::from_parts(parts, body);
    }

    let bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("could not read response body: {error}");
            return error.into_response();
        }
    };
    log_response(&parts, &String::from_utf8_lossy(&bytes));

    Response::from_parts(parts, Body::from(bytes))
}

/// Logged in place of bodies that are not read.
const NON_TEXT_BODY: &str = "<non-text body>";

/// Whether the body described by `headers` is text that can be logged.
///
/// A missing content type counts as text so that bodiless requests, such as
/// plain GETs, are still logged.
fn is_textual(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE) else {
        return true;
    };

    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime.starts_with("text/")
        || mime == "application/x-www-form-urlencoded"
        || mime == "application/json"
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

/// Replace the value of `field_name` in a URL-encoded form with asterisks.
fn redact_field(form_text: &str, field_name: &str) -> String {
    form_text
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key == field_name => format!("{key}=********"),
            _ => pair.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

async fn read_body(body: Body) -> Result<Bytes, Error> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|error| Error::BodyRead(error.to_string()))
}

/// The longest prefix of `body` that fits in [LOG_BODY_LENGTH_LIMIT] bytes
/// without splitting a character.
fn truncate_body(body: &str) -> &str {
    let mut end = LOG_BODY_LENGTH_LIMIT.min(body.len());

    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {parts:#?}\nbody: {:}...",
            truncate_body(body)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {parts:#?}\nbody: {body:?}");
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {parts:#?}\nbody: {:}...",
            truncate_body(body)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {parts:#?}\nbody: {body:?}");
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header::CONTENT_TYPE};

    use super::{LOG_BODY_LENGTH_LIMIT, is_textual, redact_field, truncate_body};

    fn headers_with_content_type(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn text_content_types_are_logged() {
        for content_type in [
            "text/html; charset=utf-8",
            "text/css",
            "application/x-www-form-urlencoded",
            "application/json",
            "Application/JSON",
        ] {
            assert!(
                is_textual(&headers_with_content_type(content_type)),
                "want {content_type:?} to be textual"
            );
        }
    }

    #[test]
    fn binary_content_types_are_not_logged() {
        for content_type in ["image/png", "application/octet-stream", "font/woff2"] {
            assert!(
                !is_textual(&headers_with_content_type(content_type)),
                "want {content_type:?} to be binary"
            );
        }
    }

    #[test]
    fn missing_content_type_is_treated_as_text() {
        assert!(is_textual(&HeaderMap::new()));
    }

    #[test]
    fn redacts_code_field() {
        assert_eq!(redact_field("code=123456", "code"), "code=********");
    }

    #[test]
    fn redacts_only_the_named_field() {
        assert_eq!(
            redact_field("method=sms&code=123456&next=1", "code"),
            "method=sms&code=********&next=1"
        );
    }

    #[test]
    fn does_not_redact_fields_with_similar_names() {
        assert_eq!(
            redact_field("zipcode=90210&code=1", "code"),
            "zipcode=90210&code=********"
        );
    }

    #[test]
    fn leaves_forms_without_the_field_untouched() {
        assert_eq!(redact_field("daily=75&monthly=2000", "code"), "daily=75&monthly=2000");
    }

    #[test]
    fn truncates_long_bodies() {
        let body = "a".repeat(LOG_BODY_LENGTH_LIMIT * 2);

        assert_eq!(truncate_body(&body).len(), LOG_BODY_LENGTH_LIMIT);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = format!("{}€", "a".repeat(LOG_BODY_LENGTH_LIMIT - 1));

        assert_eq!(truncate_body(&body), "a".repeat(LOG_BODY_LENGTH_LIMIT - 1));
    }
}

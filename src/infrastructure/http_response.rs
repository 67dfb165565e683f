// HTTP response utilities for JSON encoding
use axum::{
    body::Body,
    http::{header, HeaderValue, Response},
};
use serde::Serialize;

/// Serialize `data` into a 200 JSON response.
///
/// Encoding failures are logged and answered with an empty 200 body;
/// clients never get an error status from this path.
pub fn json_response<T: Serialize + ?Sized>(data: &T) -> Response<Body> {
    match serde_json::to_vec(data) {
        Ok(bytes) => {
            let mut response = Response::new(Body::from(bytes));
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            response
        }
        Err(e) => {
            tracing::error!("JSON serialization error: {}", e);
            Response::new(Body::empty())
        }
    }
}

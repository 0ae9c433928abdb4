//! Outgoing HTTP response type.
//!
//! Trimmed to what two plaintext endpoints need: a status code and an
//! optional text body. Handlers build a [`Response`]; the server lowers it to
//! the hyper body type just before writing.

use bytes::Bytes;
use http::StatusCode;
use http_body_util::Full;

/// An outgoing HTTP response.
pub struct Response {
    pub(crate) status: StatusCode,
    pub(crate) body: Bytes,
}

impl Response {
    /// `200 OK` with a `text/plain; charset=utf-8` body.
    pub fn text(body: impl Into<Bytes>) -> Self {
        Self { status: StatusCode::OK, body: body.into() }
    }

    /// Response with the given status and no body.
    pub fn status(status: StatusCode) -> Self {
        Self { status, body: Bytes::new() }
    }

    /// Lowers into the `http` response the connection writes out.
    pub(crate) fn into_http(self) -> http::Response<Full<Bytes>> {
        let has_body = !self.body.is_empty();
        let mut response = http::Response::new(Full::new(self.body));
        *response.status_mut() = self.status;
        if has_body {
            response.headers_mut().insert(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("text/plain; charset=utf-8"),
            );
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_200_plaintext() {
        let response = Response::text("hi\n").into_http();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[http::header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn status_has_no_content_type() {
        let response = Response::status(StatusCode::NOT_FOUND).into_http();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(http::header::CONTENT_TYPE).is_none());
    }
}

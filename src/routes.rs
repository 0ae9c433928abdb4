//! The two endpoints and the dispatch between them.
//!
//! This program routes exactly two static paths, so the whole routing table
//! is a match on method and path. Anything else gets the default 404 with no
//! body.

use http::{Method, StatusCode};

use crate::response::Response;

/// Body served on `GET /`. The greeting doubles as a reminder of what the
/// surrounding container image does and does not contain.
const GREETING: &str = "Hello from Secure Base Image!\n\
                        Running as non-root user\n\
                        No shell, no package manager, maximum security!\n";

/// Routes one request to its handler.
pub(crate) async fn dispatch(method: &Method, path: &str) -> Response {
    if method == Method::GET {
        match path {
            "/" => return greeting().await,
            "/health" => return health().await,
            _ => {}
        }
    }
    Response::status(StatusCode::NOT_FOUND)
}

/// `GET /` — the greeting the repository exists to serve.
async fn greeting() -> Response {
    Response::text(GREETING)
}

/// `GET /health` — liveness probe. If the process can answer HTTP at all it
/// is alive; this handler deliberately has no dependencies.
async fn health() -> Response {
    Response::text("OK\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_serves_the_three_line_greeting() {
        let response = dispatch(&Method::GET, "/").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body,
            "Hello from Secure Base Image!\n\
             Running as non-root user\n\
             No shell, no package manager, maximum security!\n"
        );
    }

    #[tokio::test]
    async fn health_says_ok() {
        let response = dispatch(&Method::GET, "/health").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "OK\n");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = dispatch(&Method::GET, "/nonexistent").await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn non_get_methods_fall_through() {
        let response = dispatch(&Method::POST, "/").await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
}

use poem::http::{Method, StatusCode, header};
use poem::{Endpoint, Middleware, Request, Result};

pub const APPLICATION_JSON: &str = "application/json";

/// Rejects `POST` and `PUT` requests under `prefix` unless `Content-Type` is
/// exactly `application/json`. Runs before the body is read.
pub struct RequireJsonContentType {
    prefix: &'static str,
}

impl RequireJsonContentType {
    pub fn under(prefix: &'static str) -> Self {
        Self { prefix }
    }
}

impl<E: Endpoint> Middleware<E> for RequireJsonContentType {
    type Output = RequireJsonContentTypeEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RequireJsonContentTypeEndpoint {
            inner: ep,
            prefix: self.prefix,
        }
    }
}

pub struct RequireJsonContentTypeEndpoint<E> {
    inner: E,
    prefix: &'static str,
}

fn is_under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

impl<E: Endpoint> Endpoint for RequireJsonContentTypeEndpoint<E> {
    type Output = E::Output;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let writes = *req.method() == Method::POST || *req.method() == Method::PUT;
        if writes && is_under(req.uri().path(), self.prefix) {
            let content_type = req
                .headers()
                .get(header::CONTENT_TYPE)
                .map(|value| value.to_str().unwrap_or_default());
            check_content_type(content_type)?;
        }

        self.inner.call(req).await
    }
}

fn check_content_type(content_type: Option<&str>) -> Result<()> {
    match content_type {
        Some(APPLICATION_JSON) => Ok(()),
        Some(other) => {
            tracing::error!("Invalid Content-Type: {}", other);
            Err(unsupported())
        }
        None => {
            tracing::error!("No Content-Type specified.");
            Err(unsupported())
        }
    }
}

fn unsupported() -> poem::Error {
    poem::Error::from_string(
        format!("Content-Type must be {APPLICATION_JSON}"),
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
    )
}

//! Compiler service client — request/response over HTTP.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use super::outcome::{decode, CompileOutcome, RawResponse};

/// A failure to obtain a well-formed response from the service.
#[derive(Debug, Clone)]
pub enum ServiceError {
    /// The request could not complete: connection refused, timeout,
    /// non-success HTTP status.
    Transport(String),
    /// The body arrived but did not match the expected response shape.
    Malformed(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Transport(detail) => write!(f, "compiler unreachable: {detail}"),
            ServiceError::Malformed(detail) => write!(f, "malformed compiler response: {detail}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// A compile service the orchestrator can call.
///
/// One method, one atomic request: the response either decodes into a
/// complete outcome or the whole call fails as a `ServiceError`.
pub trait CompileService {
    fn compile(&self, code: &str) -> Result<CompileOutcome, ServiceError>;
}

#[derive(Serialize)]
struct CompileRequest<'a> {
    code: &'a str,
}

/// Blocking HTTP client for the remote compiler.
pub struct HttpCompileService {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpCompileService {
    /// `timeout: None` leaves the call unbounded (the legacy behavior);
    /// the CLI default passes a bounded wait so a hung service surfaces
    /// as a transport failure instead of a permanently busy session.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ServiceError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CompileService for HttpCompileService {
    fn compile(&self, code: &str) -> Result<CompileOutcome, ServiceError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&CompileRequest { code })
            .send()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Transport(format!("HTTP {status}")));
        }

        let raw: RawResponse = response
            .json()
            .map_err(|e| ServiceError::Malformed(e.to_string()))?;

        // A response carrying neither a tree nor an error is outside the
        // contract (error present <=> tree absent) and is rejected here,
        // before decode, as structurally invalid.
        if raw.ast.is_none() && raw.error.is_none() {
            return Err(ServiceError::Malformed(
                "response carries neither ast nor error".to_string(),
            ));
        }

        Ok(decode(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_detail() {
        let err = ServiceError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));

        let err = ServiceError::Malformed("missing field `tokens`".to_string());
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn client_builds_with_and_without_timeout() {
        assert!(HttpCompileService::new(
            "http://127.0.0.1:8719/compile",
            Some(Duration::from_secs(15))
        )
        .is_ok());
        assert!(HttpCompileService::new("http://127.0.0.1:8719/compile", None).is_ok());
    }

    #[test]
    fn endpoint_accessor() {
        let svc = HttpCompileService::new("http://localhost:1/compile", None).unwrap();
        assert_eq!(svc.endpoint(), "http://localhost:1/compile");
    }

    #[test]
    fn request_serializes_code_field() {
        let body = serde_json::to_string(&CompileRequest { code: "int main" }).unwrap();
        assert_eq!(body, r#"{"code":"int main"}"#);
    }
}

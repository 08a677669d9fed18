//! The seam between the query client and the chain node.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

mod http;

pub use http::HttpTransport;

/// Failure of a single request, before any response validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The node could not be reached or did not answer in time.
    #[error("unreachable: {0}")]
    Unreachable(String),
    /// The node answered with an error status.
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    /// The node answered, but not with the expected envelope.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Request/response access to a contract-enabled chain node.
///
/// Implementations must be safe to call concurrently; every call is an
/// independent request and carries its own deadline.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Chain id reported by the node, used as the connection handshake.
    async fn chain_id(&self) -> Result<String, TransportError>;

    /// Run a read-only smart query and return the contract's raw result.
    async fn smart_query(&self, contract: &str, msg: &Value) -> Result<Value, TransportError>;

    /// Raw `{denom, amount}` balance of `address` in `denom`.
    async fn bank_balance(&self, address: &str, denom: &str) -> Result<Value, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TransportError::Rejected {
            status: 404,
            message: "404 page not found".to_string(),
        };
        assert_eq!(err.to_string(), "rejected with status 404: 404 page not found");
        assert_eq!(
            TransportError::Unreachable("connection refused".to_string()).to_string(),
            "unreachable: connection refused"
        );
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    type SmartHandler = dyn Fn(&str, &Value) -> Result<Value, TransportError> + Send + Sync;
    type BankHandler = dyn Fn(&str, &str) -> Result<Value, TransportError> + Send + Sync;

    /// In-memory transport answering from closures and counting requests.
    pub(crate) struct MockTransport {
        pub chain_id: Result<String, TransportError>,
        smart: Box<SmartHandler>,
        bank: Box<BankHandler>,
        calls: Arc<AtomicUsize>,
    }

    impl MockTransport {
        pub(crate) fn new() -> Self {
            Self {
                chain_id: Ok("nyx".to_string()),
                smart: Box::new(|_, msg| {
                    Err(TransportError::Rejected {
                        status: 400,
                        message: format!("unexpected query {msg}"),
                    })
                }),
                bank: Box::new(|_, _| {
                    Err(TransportError::Rejected {
                        status: 400,
                        message: "unexpected balance query".to_string(),
                    })
                }),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub(crate) fn on_smart<F>(mut self, handler: F) -> Self
        where
            F: Fn(&str, &Value) -> Result<Value, TransportError> + Send + Sync + 'static,
        {
            self.smart = Box::new(handler);
            self
        }

        pub(crate) fn on_bank<F>(mut self, handler: F) -> Self
        where
            F: Fn(&str, &str) -> Result<Value, TransportError> + Send + Sync + 'static,
        {
            self.bank = Box::new(handler);
            self
        }

        pub(crate) fn call_counter(&self) -> Arc<AtomicUsize> {
            self.calls.clone()
        }
    }

    #[async_trait]
    impl QueryTransport for MockTransport {
        async fn chain_id(&self) -> Result<String, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.chain_id.clone()
        }

        async fn smart_query(&self, contract: &str, msg: &Value) -> Result<Value, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // yield so concurrent callers interleave
            tokio::task::yield_now().await;
            (self.smart)(contract, msg)
        }

        async fn bank_balance(&self, address: &str, denom: &str) -> Result<Value, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.bank)(address, denom)
        }
    }
}

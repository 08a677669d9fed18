//! Typed query client over a [`QueryTransport`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::address::ContractAddresses;
use crate::config::{ClientOptions, NetworkConfig};
use crate::denom::DenomConverter;
use crate::error::{Result, ValidatorClientError};
use crate::schema::parse_response;
use crate::transport::{HttpTransport, QueryTransport, TransportError};

mod bank;
pub mod factory;
mod mixnet;
pub mod msg;
mod paging;
mod vesting;

pub use bank::BankQueryClient;
pub use factory::connect_for_query;
pub use mixnet::MixnetQueryClient;
pub use vesting::VestingQueryClient;

/// Read-only client bound to one network.
///
/// Cloning is cheap: all clones share the same transport. Nothing is mutated
/// after construction, so clones can be used from concurrent tasks.
#[derive(Clone)]
pub struct QueryClient {
    config: NetworkConfig,
    chain_id: String,
    addresses: ContractAddresses,
    pub mixnet: MixnetQueryClient,
    pub vesting: VestingQueryClient,
    pub bank: BankQueryClient,
}

impl QueryClient {
    /// Connect over HTTP. Fails with [`ValidatorClientError::Connection`] when an
    /// endpoint is invalid or the handshake does not yield a chain id.
    pub async fn connect(config: NetworkConfig, options: ClientOptions) -> Result<Self> {
        let transport = HttpTransport::new(
            &config.rpc_address,
            &config.validator_address,
            options.request_timeout,
        )?;
        Self::with_transport(config, options, Arc::new(transport)).await
    }

    /// Build a client on top of any transport.
    pub async fn with_transport(
        config: NetworkConfig,
        options: ClientOptions,
        transport: Arc<dyn QueryTransport>,
    ) -> Result<Self> {
        let addresses = ContractAddresses::resolve(&config)?;

        let chain_id =
            transport
                .chain_id()
                .await
                .map_err(|e| ValidatorClientError::Connection {
                    endpoint: config.rpc_address.clone(),
                    reason: e.to_string(),
                })?;

        info!(
            chain_id = %chain_id,
            validator = %config.validator_address,
            mixnet_contract = %addresses.mixnet,
            vesting_contract = %addresses.vesting,
            "Query client connected"
        );

        let ctx = QueryContext {
            transport,
            page_limit: options.page_limit,
        };

        Ok(Self {
            mixnet: MixnetQueryClient::new(
                ctx.clone(),
                addresses.mixnet.clone(),
                config.address_prefix.clone(),
            ),
            vesting: VestingQueryClient::new(
                ctx.clone(),
                addresses.vesting.clone(),
                config.address_prefix.clone(),
            ),
            bank: BankQueryClient::new(
                ctx,
                config.address_prefix.clone(),
                config.denom.clone(),
                DenomConverter::default(),
            ),
            config,
            chain_id,
            addresses,
        })
    }

    /// Chain id reported by the node at connection time
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn contract_addresses(&self) -> &ContractAddresses {
        &self.addresses
    }
}

/// Transport handle plus request settings shared by the per-contract clients.
#[derive(Clone)]
pub(crate) struct QueryContext {
    transport: Arc<dyn QueryTransport>,
    page_limit: Option<u32>,
}

impl QueryContext {
    pub(crate) fn page_limit(&self) -> Option<u32> {
        self.page_limit
    }

    pub(crate) fn transport(&self) -> &dyn QueryTransport {
        self.transport.as_ref()
    }

    /// Send `msg` to `contract` and return the operation name with the raw result.
    pub(crate) async fn query_raw<M: Serialize + Sync>(
        &self,
        contract: &str,
        msg: &M,
    ) -> Result<(String, Value)> {
        let msg = serde_json::to_value(msg).map_err(|e| ValidatorClientError::Transport {
            operation: "encode query message".to_string(),
            reason: e.to_string(),
        })?;
        let operation = operation_name(&msg);

        debug!(operation = %operation, contract, "Querying contract");
        let raw = self
            .transport
            .smart_query(contract, &msg)
            .await
            .map_err(|e| {
                debug!(operation = %operation, contract, error = %e, "Contract query failed");
                map_contract_error(&operation, e)
            })?;

        Ok((operation, raw))
    }

    pub(crate) async fn query<T: DeserializeOwned, M: Serialize + Sync>(
        &self,
        contract: &str,
        msg: &M,
    ) -> Result<T> {
        let (operation, raw) = self.query_raw(contract, msg).await?;
        parse_response(&operation, &raw)
    }
}

/// `{"get_mixnode_details": {...}}` -> `get_mixnode_details`
fn operation_name(msg: &Value) -> String {
    msg.as_object()
        .and_then(|obj| obj.keys().next())
        .cloned()
        .unwrap_or_else(|| "query".to_string())
}

/// Gateway message of a contract that ran and returned an error.
const CONTRACT_FAILURE_MARKER: &str = "query wasm contract failed";

fn is_missing_entity_message(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains(CONTRACT_FAILURE_MARKER)
        && (message.contains("not found") || message.contains("does not exist"))
}

/// Map a failed request onto the error taxonomy. Never yields `NotFound`:
/// the status alone does not say which entity is absent.
pub(crate) fn map_transport_error(operation: &str, err: TransportError) -> ValidatorClientError {
    match err {
        TransportError::Unreachable(reason) => ValidatorClientError::Transport {
            operation: operation.to_string(),
            reason,
        },
        TransportError::Malformed(reason) => ValidatorClientError::SchemaMismatch {
            query: operation.to_string(),
            field: "<root>".to_string(),
            reason,
        },
        // gateway and proxy failures in front of the node
        TransportError::Rejected {
            status: status @ (502..=504),
            message,
        } => ValidatorClientError::Transport {
            operation: operation.to_string(),
            reason: format!("status {status}: {message}"),
        },
        TransportError::Rejected { status, message } => ValidatorClientError::ContractQuery {
            operation: operation.to_string(),
            message: format!("{message} (status {status})"),
        },
    }
}

/// Like [`map_transport_error`], but a contract that failed because the
/// queried entity does not exist yields `NotFound`.
pub(crate) fn map_contract_error(operation: &str, err: TransportError) -> ValidatorClientError {
    match err {
        TransportError::Rejected {
            status: 500,
            ref message,
        } if is_missing_entity_message(message) => {
            ValidatorClientError::not_found(format!("target of `{operation}`"))
        }
        other => map_transport_error(operation, other),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use serde_json::json;
    use std::sync::atomic::Ordering;

    pub(crate) async fn mock_client(transport: MockTransport) -> QueryClient {
        mock_client_with(transport, ClientOptions::default()).await
    }

    pub(crate) async fn mock_client_with(
        transport: MockTransport,
        options: ClientOptions,
    ) -> QueryClient {
        QueryClient::with_transport(NetworkConfig::default(), options, Arc::new(transport))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_connect_records_chain_id() {
        let client = mock_client(MockTransport::new()).await;
        assert_eq!(client.chain_id(), "nyx");
        assert_eq!(
            client.mixnet.address(),
            "n17srjznxl9dvzdkpwpw24gg668wc73val88a6m5ajg6ankwvz9wtst0cznr"
        );
        assert_eq!(client.contract_addresses().vesting, client.vesting.address());
    }

    #[tokio::test]
    async fn test_failed_handshake_is_a_connection_error() {
        let mut transport = MockTransport::new();
        transport.chain_id = Err(TransportError::Unreachable("connection refused".into()));

        let err = QueryClient::with_transport(
            NetworkConfig::default(),
            ClientOptions::default(),
            Arc::new(transport),
        )
        .await
        .err()
        .unwrap();
        assert!(matches!(err, ValidatorClientError::Connection { .. }));
    }

    #[tokio::test]
    async fn test_bad_contract_address_fails_before_handshake() {
        let transport = MockTransport::new();
        let calls = transport.call_counter();
        let config = NetworkConfig {
            mixnet_contract_address: String::new(),
            ..NetworkConfig::default()
        };

        let err = QueryClient::with_transport(config, ClientOptions::default(), Arc::new(transport))
            .await
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ValidatorClientError::MissingContractAddress { contract: "mixnet", .. }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    fn rejected(status: u16, message: &str) -> TransportError {
        TransportError::Rejected {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            map_contract_error("q", TransportError::Unreachable("timeout".into())),
            ValidatorClientError::Transport { .. }
        ));
        assert!(matches!(
            map_contract_error("q", rejected(503, "upstream unavailable")),
            ValidatorClientError::Transport { .. }
        ));
        assert!(map_contract_error(
            "q",
            rejected(
                500,
                "Vesting account does not exist: query wasm contract failed: unknown request"
            )
        )
        .is_not_found());
        assert!(matches!(
            map_contract_error("q", rejected(400, "unknown variant `get_foo`")),
            ValidatorClientError::ContractQuery { .. }
        ));
    }

    #[test]
    fn test_wrong_endpoint_is_not_an_absent_entity() {
        for status in [404, 405, 501] {
            let err = map_contract_error("get_mixnode_details", rejected(status, "404 page not found"));
            assert!(
                matches!(err, ValidatorClientError::ContractQuery { ref message, .. } if message.contains(&status.to_string())),
                "status {status} mapped to {err:?}"
            );
        }
        // a node error outside contract execution
        let err = map_contract_error("q", rejected(500, "codespace sdk: key not found"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_balance_errors_are_never_not_found() {
        let err = map_transport_error(
            "balance",
            rejected(500, "account not found: query wasm contract failed"),
        );
        assert!(matches!(err, ValidatorClientError::ContractQuery { .. }));
    }

    #[test]
    fn test_malformed_envelope_is_a_schema_mismatch() {
        let err = map_contract_error(
            "get_state_params",
            TransportError::Malformed("response has no `data` field".into()),
        );
        assert!(matches!(err, ValidatorClientError::SchemaMismatch { .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_operation_name() {
        assert_eq!(
            operation_name(&json!({ "get_state_params": {} })),
            "get_state_params"
        );
    }
}

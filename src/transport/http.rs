use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::{QueryTransport, TransportError};
use crate::error::{Result, ValidatorClientError};
use crate::json::encode_query_msg;

/// Production transport: Tendermint JSON-RPC for the handshake, the validator
/// REST gateway for contract and bank queries.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    rpc_url: Url,
    validator_url: String,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    message: String,
    data: Option<String>,
}

/// Error body of the REST gateway.
#[derive(Deserialize)]
struct GatewayError {
    message: String,
}

impl HttpTransport {
    pub fn new(rpc_address: &str, validator_address: &str, timeout: Duration) -> Result<Self> {
        let rpc_url = parse_endpoint(rpc_address)?;
        let validator_url = parse_endpoint(validator_address)?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ValidatorClientError::Connection {
                endpoint: validator_address.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            rpc_url,
            validator_url: validator_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json(
        &self,
        request: reqwest::RequestBuilder,
    ) -> std::result::Result<Value, TransportError> {
        let response = request.send().await.map_err(unreachable)?;
        let status = response.status();
        let body = response.text().await.map_err(unreachable)?;

        if !status.is_success() {
            return Err(rejected(status, &body));
        }
        serde_json::from_str(&body).map_err(|e| TransportError::Malformed(e.to_string()))
    }
}

fn parse_endpoint(address: &str) -> Result<Url> {
    let url = Url::parse(address).map_err(|e| ValidatorClientError::Connection {
        endpoint: address.to_string(),
        reason: format!("invalid url: {e}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ValidatorClientError::Connection {
            endpoint: address.to_string(),
            reason: format!("unsupported scheme `{}`", url.scheme()),
        });
    }
    Ok(url)
}

fn unreachable(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Unreachable(format!("request timed out: {e}"))
    } else {
        TransportError::Unreachable(e.to_string())
    }
}

fn rejected(status: StatusCode, body: &str) -> TransportError {
    let message = serde_json::from_str::<GatewayError>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.trim().to_string());
    TransportError::Rejected {
        status: status.as_u16(),
        message,
    }
}

/// Pull `field` out of a response envelope, keeping `null` values.
fn take_field(mut body: Value, field: &str) -> std::result::Result<Value, TransportError> {
    match body.as_object_mut().and_then(|obj| obj.remove(field)) {
        Some(value) => Ok(value),
        None => Err(TransportError::Malformed(format!(
            "response has no `{field}` field"
        ))),
    }
}

#[async_trait]
impl QueryTransport for HttpTransport {
    async fn chain_id(&self) -> std::result::Result<String, TransportError> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "status",
            "params": {},
        });
        let body = self
            .get_json(self.http.post(self.rpc_url.clone()).json(&request))
            .await?;
        let rpc: RpcResponse =
            serde_json::from_value(body).map_err(|e| TransportError::Malformed(e.to_string()))?;
        if let Some(error) = rpc.error {
            let message = match error.data {
                Some(data) => format!("{}: {data}", error.message),
                None => error.message,
            };
            return Err(TransportError::Rejected {
                status: StatusCode::OK.as_u16(),
                message,
            });
        }

        rpc.result
            .as_ref()
            .and_then(|result| result.pointer("/node_info/network"))
            .and_then(Value::as_str)
            .filter(|network| !network.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                TransportError::Malformed("status response carries no node_info.network".into())
            })
    }

    async fn smart_query(
        &self,
        contract: &str,
        msg: &Value,
    ) -> std::result::Result<Value, TransportError> {
        let encoded =
            encode_query_msg(msg).map_err(|e| TransportError::Malformed(e.to_string()))?;
        let url = format!(
            "{}/cosmwasm/wasm/v1/contract/{contract}/smart/{encoded}",
            self.validator_url
        );
        debug!(contract, url = %url, "Sending smart query");

        let body = self.get_json(self.http.get(url)).await?;
        take_field(body, "data")
    }

    async fn bank_balance(
        &self,
        address: &str,
        denom: &str,
    ) -> std::result::Result<Value, TransportError> {
        let url = format!(
            "{}/cosmos/bank/v1beta1/balances/{address}/by_denom",
            self.validator_url
        );
        let body = self
            .get_json(self.http.get(url).query(&[("denom", denom)]))
            .await?;
        take_field(body, "balance")
    }
}

//! JSON-RPC transport for read-only calls against an Ethereum node.
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use crate::error::RpcError;

/// Block height selector for a query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockId {
    #[default]
    Latest,
    Number(u64),
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockId::Latest => f.write_str("latest"),
            BlockId::Number(number) => write!(f, "0x{:x}", number),
        }
    }
}

impl From<u64> for BlockId {
    fn from(number: u64) -> Self {
        BlockId::Number(number)
    }
}

/// Read-only node access as the client facade consumes it. Implemented by
/// [`EthereumRpc`]; tests substitute canned transports.
#[async_trait]
pub trait NodeProvider: Send + Sync {
    /// Issues an `eth_call` against `to` at `block` and returns the raw hex
    /// result.
    async fn eth_call(&self, to: &str, data: &str, block: BlockId) -> Result<String, RpcError>;
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
    id: u64,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// HTTP JSON-RPC 2.0 client. Request ids increase monotonically per
/// instance; the counter lives in the transport value rather than in any
/// process-wide state.
pub struct EthereumRpc {
    endpoint: Url,
    http: reqwest::Client,
    request_id: AtomicU64,
}

impl EthereumRpc {
    pub fn new(endpoint: &str) -> Result<Self, RpcError> {
        Ok(EthereumRpc {
            endpoint: Url::parse(endpoint)?,
            http: reqwest::Client::new(),
            request_id: AtomicU64::new(0),
        })
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let body = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: self.request_id.fetch_add(1, Ordering::Relaxed),
        };
        debug!(method, id = body.id, "dispatching JSON-RPC request");

        let response: RpcResponse = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(RpcError::Node {
                code: error.code,
                message: error.message,
            });
        }
        match response.result {
            Some(result) if !result.is_null() => Ok(result),
            _ => Err(RpcError::NoResult(method.to_string())),
        }
    }
}

#[async_trait]
impl NodeProvider for EthereumRpc {
    async fn eth_call(&self, to: &str, data: &str, block: BlockId) -> Result<String, RpcError> {
        let params = json!([{ "to": to, "data": data }, block.to_string()]);
        let result = self.request("eth_call", params).await?;
        let result = result
            .as_str()
            .ok_or_else(|| RpcError::NoResult("eth_call".to_string()))?;
        if result == "0x" {
            return Err(RpcError::EmptyResult);
        }

        Ok(result.to_string())
    }
}

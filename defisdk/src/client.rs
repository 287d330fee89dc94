//! The async query facade over the adapter registry.
use tracing::debug;

use crate::calldata::{self, Selectors};
use crate::codec::entity;
use crate::config::DeFiSdkConfig;
use crate::entities::{AdapterBalance, AssetBalance, ProtocolBalance, TokenBalance, TokenMetadata};
use crate::error::{DeFiSdkError, DecodeError};
use crate::rpc::{BlockId, EthereumRpc, NodeProvider};

/// Read-only client for the on-chain DeFi adapter registry.
///
/// Every query issues one `eth_call` against the registry contract and
/// decodes its ABI-encoded return payload into value records. Results are a
/// snapshot at the requested block; nothing is cached or mutated.
pub struct DeFiSdk<P = EthereumRpc> {
    provider: P,
    registry: String,
    selectors: Selectors,
}

impl DeFiSdk<EthereumRpc> {
    /// Connects to a node, querying the default registry deployment.
    pub fn new(node_url: &str) -> Result<Self, DeFiSdkError> {
        Self::from_config(&DeFiSdkConfig::new(node_url))
    }

    pub fn from_config(config: &DeFiSdkConfig) -> Result<Self, DeFiSdkError> {
        let provider = EthereumRpc::new(&config.node_url).map_err(DeFiSdkError::Rpc)?;
        Ok(Self::with_provider(provider, &config.registry_address))
    }
}

impl<P: NodeProvider> DeFiSdk<P> {
    /// Builds a client over any node provider.
    pub fn with_provider(provider: P, registry: &str) -> Self {
        DeFiSdk {
            provider,
            registry: calldata::normalize_address(registry),
            selectors: Selectors::new(),
        }
    }

    /// The underlying node provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The registry contract address queries are issued against.
    pub fn registry(&self) -> &str {
        &self.registry
    }

    async fn call(&self, data: String, block: BlockId) -> Result<String, DeFiSdkError> {
        Ok(self.provider.eth_call(&self.registry, &data, block).await?)
    }

    /// Balances of every supported protocol held by `address`.
    pub async fn get_account_balance(
        &self,
        address: &str,
        block: BlockId,
    ) -> Result<Vec<ProtocolBalance>, DeFiSdkError> {
        debug!(address, %block, "querying account balance");
        let data = calldata::with_address_arg(&self.selectors.get_balances, address);
        let result = self.call(data, block).await?;
        Ok(entity::protocol_balances(&result)?)
    }

    /// Balance held by `address` on one adapter contract.
    pub async fn get_adapter_balance(
        &self,
        address: &str,
        adapter: &str,
        block: BlockId,
    ) -> Result<AdapterBalance, DeFiSdkError> {
        let data = calldata::with_address_and_address_array(
            &self.selectors.get_adapter_balances,
            address,
            adapter,
        );
        let result = self.call(data, block).await?;
        let mut balances = entity::adapter_balances(&result)?;
        if balances.is_empty() {
            return Err(DecodeError::EmptyPayload("adapter balance").into());
        }
        Ok(balances.remove(0))
    }

    /// Balance held by `address` across one protocol's adapters.
    pub async fn get_protocol_balance(
        &self,
        address: &str,
        protocol: &str,
        block: BlockId,
    ) -> Result<ProtocolBalance, DeFiSdkError> {
        let data = calldata::with_address_and_string_array(
            &self.selectors.get_protocol_balances,
            address,
            protocol,
        );
        let result = self.call(data, block).await?;
        let mut balances = entity::protocol_balances(&result)?;
        if balances.is_empty() {
            return Err(DecodeError::EmptyPayload("protocol balance").into());
        }
        Ok(balances.remove(0))
    }

    /// Names of every protocol the registry supports.
    pub async fn get_protocol_names(&self, block: BlockId) -> Result<Vec<String>, DeFiSdkError> {
        let result = self
            .call(self.selectors.get_protocol_names.clone(), block)
            .await?;
        Ok(entity::string_list(&result)?)
    }

    /// Names of every registered token adapter.
    pub async fn get_token_adapter_names(
        &self,
        block: BlockId,
    ) -> Result<Vec<String>, DeFiSdkError> {
        let result = self
            .call(self.selectors.get_token_adapter_names.clone(), block)
            .await?;
        Ok(entity::string_list(&result)?)
    }

    /// Adapter contract addresses registered for a protocol.
    pub async fn get_protocol_adapters(
        &self,
        protocol: &str,
        block: BlockId,
    ) -> Result<Vec<String>, DeFiSdkError> {
        let data = calldata::with_string_arg(&self.selectors.get_protocol_adapters, protocol);
        let result = self.call(data, block).await?;
        Ok(entity::address_list(&result)?)
    }

    /// Contract address of a named token adapter.
    pub async fn get_token_adapter(
        &self,
        adapter_name: &str,
        block: BlockId,
    ) -> Result<String, DeFiSdkError> {
        let data = calldata::with_string_arg(&self.selectors.get_token_adapter, adapter_name);
        let result = self.call(data, block).await?;
        Ok(entity::address(&result)?)
    }

    /// A token's balance with its underlying components, reported through
    /// the 18-decimal rate convention and rebased to the base token's own
    /// decimals.
    pub async fn get_full_token_balance(
        &self,
        token_type: &str,
        token_address: &str,
        block: BlockId,
    ) -> Result<AssetBalance, DeFiSdkError> {
        let data = calldata::with_string_and_address(
            &self.selectors.get_full_token_balance,
            token_type,
            token_address,
        );
        let result = self.call(data, block).await?;
        Ok(entity::full_token_balance(&result)?)
    }

    /// Like [`get_full_token_balance`](Self::get_full_token_balance), but
    /// recursing through wrapped tokens down to the final constituents.
    pub async fn get_final_full_token_balance(
        &self,
        token_type: &str,
        token_address: &str,
        block: BlockId,
    ) -> Result<AssetBalance, DeFiSdkError> {
        let data = calldata::with_string_and_address(
            &self.selectors.get_final_full_token_balance,
            token_type,
            token_address,
        );
        let result = self.call(data, block).await?;
        Ok(entity::full_token_balance(&result)?)
    }

    /// The underlying components of a token.
    pub async fn get_token_components(
        &self,
        token_type: &str,
        token_address: &str,
        block: BlockId,
    ) -> Result<Vec<TokenBalance>, DeFiSdkError> {
        Ok(self
            .get_full_token_balance(token_type, token_address, block)
            .await?
            .underlying)
    }

    /// The final underlying components of a token.
    pub async fn get_final_token_components(
        &self,
        token_type: &str,
        token_address: &str,
        block: BlockId,
    ) -> Result<Vec<TokenBalance>, DeFiSdkError> {
        Ok(self
            .get_final_full_token_balance(token_type, token_address, block)
            .await?
            .underlying)
    }

    /// A token's on-chain metadata.
    pub async fn get_token_metadata(
        &self,
        token_type: &str,
        token_address: &str,
        block: BlockId,
    ) -> Result<TokenMetadata, DeFiSdkError> {
        Ok(self
            .get_full_token_balance(token_type, token_address, block)
            .await?
            .base
            .metadata)
    }
}

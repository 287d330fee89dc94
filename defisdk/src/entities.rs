//! Value records produced by registry queries. Each record owns its children
//! and is never mutated after decoding; equality is structural.
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// On-chain identity of a token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Lower-case `0x`-prefixed contract address.
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/// An amount of one token, scaled to the token's own decimal convention.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenBalance {
    pub metadata: TokenMetadata,
    /// Exact fixed-point amount. Never passes through binary floating point.
    pub balance: BigDecimal,
}

/// A position: the held token plus the tokens backing it, in on-chain return
/// order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetBalance {
    pub base: TokenBalance,
    pub underlying: Vec<TokenBalance>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterMetadata {
    /// Lower-case `0x`-prefixed adapter contract address.
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdapterBalance {
    pub metadata: AdapterMetadata,
    pub assets: Vec<AssetBalance>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolMetadata {
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub icon_url: String,
    pub version: u64,
}

/// Root of the containment tree returned by the balance queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProtocolBalance {
    pub metadata: ProtocolMetadata,
    pub adapters: Vec<AdapterBalance>,
}

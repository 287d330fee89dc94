#![warn(unused_qualifications)]
//! An async client for the DeFi SDK on-chain adapter registry.
//!
//! Queries are issued as `eth_call`s against a fixed registry contract and
//! the ABI-encoded return payloads decoded into immutable value records:
//! token metadata, token balances, and their adapter and protocol groupings.
//! Balances are exact fixed-point decimals; nothing passes through binary
//! floating point.
//!
//! # Examples
//!
//! ```no_run
//! use defisdk::{BlockId, DeFiSdk};
//!
//! async fn account_balance_example() {
//!     let sdk = DeFiSdk::new("https://mainnet.node.example").unwrap();
//!     let balances = sdk
//!         .get_account_balance("0x42b9df65b219b3dd36ff330a4dd8f327a6ada990", BlockId::Latest)
//!         .await
//!         .unwrap();
//!     for protocol in balances {
//!         println!("{}: {} adapters", protocol.metadata.name, protocol.adapters.len());
//!     }
//! }
//! ```

pub use client::DeFiSdk;
pub use config::{DeFiSdkConfig, DEFAULT_REGISTRY};
pub use entities::{
    AdapterBalance, AdapterMetadata, AssetBalance, ProtocolBalance, ProtocolMetadata, TokenBalance,
    TokenMetadata,
};
pub use error::{ConfigError, DeFiSdkError, DecodeError, RpcError};
pub use rpc::{BlockId, EthereumRpc, NodeProvider};

pub mod calldata;
pub mod client;
pub mod codec;
pub mod config;
pub mod entities;
pub mod error;
pub mod rpc;

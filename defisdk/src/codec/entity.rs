//! Entity decoders, one per record kind. Each hardcodes its head layout
//! (which words are inline scalars and which are indirections) and resolves
//! offsets relative to the window it was handed.
use super::{array, location_at, slice_from, slice_range, split_words, text, word_at, words};
use super::{ElementKind, Word};
use crate::entities::{
    AdapterBalance, AdapterMetadata, AssetBalance, ProtocolBalance, ProtocolMetadata, TokenBalance,
    TokenMetadata,
};
use crate::error::DecodeError;

/// Decimal scale of the fixed convention in which on-chain rates are
/// reported.
const RATE_SCALE: i64 = 18;

/// Head layout: address, name offset, symbol offset, decimals.
pub fn token_metadata(window: &[Word]) -> Result<TokenMetadata, DecodeError> {
    let name_location = location_at(window, 1, "token name offset")?;
    let symbol_location = location_at(window, 2, "token symbol offset")?;

    Ok(TokenMetadata {
        address: words::to_address(word_at(window, 0, "token address")?),
        name: text::decode(
            slice_range(window, name_location, symbol_location, "token name")?,
            "token name",
        )?,
        symbol: text::decode(
            slice_from(window, symbol_location, "token symbol")?,
            "token symbol",
        )?,
        decimals: words::to_u32(word_at(window, 3, "token decimals")?, "token decimals")?,
    })
}

/// Head layout: metadata offset, raw balance.
///
/// The metadata is decoded first so the raw integer can be scaled by the
/// token's own decimal count. In rate mode the scale is additionally shifted
/// by `18 - base_decimals` to rebase the fixed 18-decimal reporting
/// convention onto the base token's true decimal count.
pub fn token_balance(
    window: &[Word],
    rate: bool,
    base_decimals: u32,
) -> Result<TokenBalance, DecodeError> {
    let metadata_location = location_at(window, 0, "token metadata offset")?;
    let metadata = token_metadata(slice_from(window, metadata_location, "token metadata")?)?;

    let shift = if rate {
        RATE_SCALE - i64::from(base_decimals)
    } else {
        0
    };
    let balance = words::to_decimal(
        word_at(window, 1, "token balance")?,
        i64::from(metadata.decimals) + shift,
    );

    Ok(TokenBalance { metadata, balance })
}

/// Head layout: base balance offset, underlying array offset.
pub fn asset_balance(window: &[Word], rate: bool) -> Result<AssetBalance, DecodeError> {
    let base_location = location_at(window, 0, "base balance offset")?;
    let underlying_location = location_at(window, 1, "underlying balances offset")?;

    let base = token_balance(
        slice_range(window, base_location, underlying_location, "base balance")?,
        rate,
        18,
    )?;
    let base_decimals = base.metadata.decimals;
    let underlying = array::decode(
        slice_from(window, underlying_location, "underlying balances")?,
        ElementKind::Dynamic,
        "underlying balances",
        |element| token_balance(element, rate, base_decimals),
    )?;

    Ok(AssetBalance { base, underlying })
}

/// Head layout: address, type offset.
pub fn adapter_metadata(window: &[Word]) -> Result<AdapterMetadata, DecodeError> {
    let kind_location = location_at(window, 1, "adapter type offset")?;

    Ok(AdapterMetadata {
        address: words::to_address(word_at(window, 0, "adapter address")?),
        kind: text::decode(
            slice_from(window, kind_location, "adapter type")?,
            "adapter type",
        )?,
    })
}

/// Head layout: metadata offset, asset array offset.
pub fn adapter_balance(window: &[Word]) -> Result<AdapterBalance, DecodeError> {
    let metadata_location = location_at(window, 0, "adapter metadata offset")?;
    let assets_location = location_at(window, 1, "asset balances offset")?;

    Ok(AdapterBalance {
        metadata: adapter_metadata(slice_range(
            window,
            metadata_location,
            assets_location,
            "adapter metadata",
        )?)?,
        assets: array::decode(
            slice_from(window, assets_location, "asset balances")?,
            ElementKind::Dynamic,
            "asset balances",
            |element| asset_balance(element, false),
        )?,
    })
}

/// Head layout: four text offsets in sequence, then the version. Each text
/// window ends where the next begins; the last runs to the end of the
/// window.
pub fn protocol_metadata(window: &[Word]) -> Result<ProtocolMetadata, DecodeError> {
    let name_location = location_at(window, 0, "protocol name offset")?;
    let description_location = location_at(window, 1, "protocol description offset")?;
    let website_location = location_at(window, 2, "protocol website offset")?;
    let icon_location = location_at(window, 3, "protocol icon offset")?;

    Ok(ProtocolMetadata {
        name: text::decode(
            slice_range(window, name_location, description_location, "protocol name")?,
            "protocol name",
        )?,
        description: text::decode(
            slice_range(
                window,
                description_location,
                website_location,
                "protocol description",
            )?,
            "protocol description",
        )?,
        website_url: text::decode(
            slice_range(window, website_location, icon_location, "protocol website")?,
            "protocol website",
        )?,
        icon_url: text::decode(
            slice_from(window, icon_location, "protocol icon")?,
            "protocol icon",
        )?,
        version: words::to_u64(word_at(window, 4, "protocol version")?, "protocol version")?,
    })
}

/// Head layout: metadata offset, adapter array offset.
pub fn protocol_balance(window: &[Word]) -> Result<ProtocolBalance, DecodeError> {
    let metadata_location = location_at(window, 0, "protocol metadata offset")?;
    let adapters_location = location_at(window, 1, "adapter balances offset")?;

    Ok(ProtocolBalance {
        metadata: protocol_metadata(slice_range(
            window,
            metadata_location,
            adapters_location,
            "protocol metadata",
        )?)?,
        adapters: array::decode(
            slice_from(window, adapters_location, "adapter balances")?,
            ElementKind::Dynamic,
            "adapter balances",
            adapter_balance,
        )?,
    })
}

// Entry points over raw `eth_call` results.

/// Decodes a `getBalances`/`getProtocolBalances` result.
pub fn protocol_balances(payload: &str) -> Result<Vec<ProtocolBalance>, DecodeError> {
    let stream = split_present(payload, "protocol balances")?;
    array::decode(
        &stream,
        ElementKind::Dynamic,
        "protocol balances",
        protocol_balance,
    )
}

/// Decodes a `getAdapterBalances` result.
pub fn adapter_balances(payload: &str) -> Result<Vec<AdapterBalance>, DecodeError> {
    let stream = split_present(payload, "adapter balances")?;
    array::decode(
        &stream,
        ElementKind::Dynamic,
        "adapter balances",
        adapter_balance,
    )
}

/// Decodes a `getFullTokenBalance`/`getFinalFullTokenBalance` result.
///
/// These views report underlying amounts as 18-decimal exchange rates, so the
/// asset is decoded in rate mode, and their return wraps the struct in one
/// extra head word that is stripped here.
pub fn full_token_balance(payload: &str) -> Result<AssetBalance, DecodeError> {
    let stream = split_present(payload, "full token balance")?;
    asset_balance(&stream[1..], true)
}

/// Decodes a `getProtocolNames`/`getTokenAdapterNames` result.
pub fn string_list(payload: &str) -> Result<Vec<String>, DecodeError> {
    let stream = split_present(payload, "name list")?;
    array::decode(&stream, ElementKind::Dynamic, "name list", |window| {
        text::decode(window, "name")
    })
}

/// Decodes a `getProtocolAdapters` result: a flat array of addresses.
pub fn address_list(payload: &str) -> Result<Vec<String>, DecodeError> {
    let stream = split_present(payload, "address list")?;
    array::decode(&stream, ElementKind::Static, "address list", |window| {
        Ok(words::to_address(word_at(window, 0, "address")?))
    })
}

/// Decodes a single-address result, such as `getTokenAdapter`.
pub fn address(payload: &str) -> Result<String, DecodeError> {
    let stream = split_present(payload, "address")?;
    let word = stream.last().ok_or(DecodeError::EmptyPayload("address"))?;
    Ok(words::to_address(word))
}

fn split_present(payload: &str, context: &'static str) -> Result<Vec<Word>, DecodeError> {
    let stream = split_words(payload)?;
    if stream.is_empty() {
        return Err(DecodeError::EmptyPayload(context));
    }
    Ok(stream)
}

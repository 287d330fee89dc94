#![allow(dead_code)]

//! Builders for ABI-encoded registry payloads used across the decode and
//! client tests.

/// Sample holder address used throughout the tests.
pub const HOLDER: &str = "0x42b9df65b219b3dd36ff330a4dd8f327a6ada990";

pub fn uint(value: u64) -> String {
    format!("{:064x}", value)
}

/// A head word pointing at `word_index` within the current window.
pub fn offset(word_index: usize) -> String {
    uint((word_index * 32) as u64)
}

pub fn address(addr: &str) -> String {
    format!("{:0>64}", addr.trim_start_matches("0x"))
}

/// Length-prefixed string words, data left-aligned and padded to whole
/// words.
pub fn string(value: &str) -> Vec<String> {
    let data = hex::encode(value.as_bytes());
    let padded = ((data.len() + 63) / 64 * 64).max(64);
    let data = format!("{:0<width$}", data, width = padded);
    let mut out = vec![uint(value.len() as u64)];
    out.extend((0..padded).step_by(64).map(|i| data[i..i + 64].to_string()));
    out
}

/// A dynamic-element array window: head indirection, length, per-element
/// offsets, then the element encodings back to back.
pub fn dynamic_array(elements: &[Vec<String>]) -> Vec<String> {
    let mut out = vec![offset(1), uint(elements.len() as u64)];
    let mut position = elements.len();
    for element in elements {
        out.push(offset(position));
        position += element.len();
    }
    for element in elements {
        out.extend(element.iter().cloned());
    }
    out
}

/// A static-element array window: one word per element, contiguous after the
/// length word.
pub fn static_array(items: &[String]) -> Vec<String> {
    let mut out = vec![offset(1), uint(items.len() as u64)];
    out.extend(items.iter().cloned());
    out
}

pub fn token_metadata(addr: &str, name: &str, symbol: &str, decimals: u64) -> Vec<String> {
    let name_words = string(name);
    let mut out = vec![
        address(addr),
        offset(4),
        offset(4 + name_words.len()),
        uint(decimals),
    ];
    out.extend(name_words);
    out.extend(string(symbol));
    out
}

pub fn token_balance(raw: u64, metadata: Vec<String>) -> Vec<String> {
    let mut out = vec![offset(2), uint(raw)];
    out.extend(metadata);
    out
}

pub fn asset_balance(base: Vec<String>, underlying: &[Vec<String>]) -> Vec<String> {
    let mut out = vec![offset(2), offset(2 + base.len())];
    out.extend(base);
    out.extend(dynamic_array(underlying));
    out
}

pub fn adapter_metadata(addr: &str, kind: &str) -> Vec<String> {
    let mut out = vec![address(addr), offset(2)];
    out.extend(string(kind));
    out
}

pub fn adapter_balance(metadata: Vec<String>, assets: &[Vec<String>]) -> Vec<String> {
    let mut out = vec![offset(2), offset(2 + metadata.len())];
    out.extend(metadata);
    out.extend(dynamic_array(assets));
    out
}

pub fn protocol_metadata(
    name: &str,
    description: &str,
    website: &str,
    icon: &str,
    version: u64,
) -> Vec<String> {
    let strings = [string(name), string(description), string(website), string(icon)];
    let mut position = 5;
    let mut out = Vec::new();
    for words in &strings {
        out.push(offset(position));
        position += words.len();
    }
    out.push(uint(version));
    for words in strings {
        out.extend(words);
    }
    out
}

pub fn protocol_balance(metadata: Vec<String>, adapters: &[Vec<String>]) -> Vec<String> {
    let mut out = vec![offset(2), offset(2 + metadata.len())];
    out.extend(metadata);
    out.extend(dynamic_array(adapters));
    out
}

/// Joins words into a `0x`-prefixed payload the way a node would return it.
pub fn payload(words: Vec<String>) -> String {
    format!("0x{}", words.concat())
}

//! Function selectors and call-data construction for the registry's call
//! sites. Arguments are flat word concatenations; only the handful of fixed
//! shapes the registry views take are supported.
use tiny_keccak::{Hasher, Keccak};

use crate::codec::strip_hex_prefix;

const WORD_HEX: usize = 64;

/// Classification digit carried in derived adapter identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdapterKind {
    Asset = 1,
    Debt = 2,
}

/// First 4 bytes of the Keccak-256 digest of `signature`, `0x`-prefixed.
pub fn selector(signature: &str) -> String {
    let mut hasher = Keccak::v256();
    let mut digest = [0u8; 32];
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut digest);
    format!("0x{}", hex::encode(&digest[..4]))
}

/// Lower-cases an address and ensures the `0x` prefix.
pub fn normalize_address(address: &str) -> String {
    let address = address.to_lowercase();
    if address.starts_with("0x") {
        address
    } else {
        format!("0x{}", address)
    }
}

/// A quantity left-padded with zeros to one word.
pub fn uint_word(value: u64) -> String {
    format!("{:064x}", value)
}

/// An address left-padded with zeros to one word.
pub fn address_word(address: &str) -> String {
    format!("{:0>64}", strip_hex_prefix(&address.to_lowercase()))
}

/// The words of a dynamic string argument: byte length, then left-aligned
/// data padded to a whole number of words.
pub fn string_words(value: &str) -> Vec<String> {
    let mut data = hex::encode(value.as_bytes());
    let padded = (data.len() + WORD_HEX - 1) / WORD_HEX * WORD_HEX;
    data.push_str(&"0".repeat(padded - data.len()));

    let mut words = vec![uint_word(value.len() as u64)];
    words.extend((0..padded).step_by(WORD_HEX).map(|i| data[i..i + WORD_HEX].to_string()));
    words
}

/// `selector ++ (address)` call data.
pub fn with_address_arg(selector: &str, address: &str) -> String {
    format!("{}{}", selector, address_word(address))
}

/// `selector ++ (address, address[1])` call data.
pub fn with_address_and_address_array(selector: &str, address: &str, element: &str) -> String {
    let words = [
        address_word(address),
        uint_word(64), // position of the dynamic argument
        uint_word(1),  // length of the dynamic argument
        address_word(element),
    ];
    format!("{}{}", selector, words.join(""))
}

/// `selector ++ (address, string[1])` call data.
pub fn with_address_and_string_array(selector: &str, address: &str, element: &str) -> String {
    let mut words = vec![
        address_word(address),
        uint_word(64), // position of the dynamic argument
        uint_word(1),  // length of the dynamic argument
        uint_word(32), // position of the single element
    ];
    words.extend(string_words(element));
    format!("{}{}", selector, words.join(""))
}

/// `selector ++ (string)` call data.
pub fn with_string_arg(selector: &str, value: &str) -> String {
    let mut words = vec![uint_word(32)];
    words.extend(string_words(value));
    format!("{}{}", selector, words.join(""))
}

/// `selector ++ (string, address)` call data.
pub fn with_string_and_address(selector: &str, value: &str, address: &str) -> String {
    let mut words = vec![uint_word(64), address_word(address)];
    words.extend(string_words(value));
    format!("{}{}", selector, words.join(""))
}

/// Derived on-chain identifier for a named adapter of a given kind: the
/// name's bytes hex-encoded, zero-padded, with the kind digit in the last
/// nibble.
pub fn adapter_id(name: &str, kind: AdapterKind) -> String {
    let encoded = hex::encode(name.as_bytes());
    format!(
        "0x{}{}{}",
        encoded,
        "0".repeat(63usize.saturating_sub(encoded.len())),
        kind as u8
    )
}

/// 4-byte selectors for the registry views, computed once per client.
#[derive(Clone, Debug)]
pub(crate) struct Selectors {
    pub get_balances: String,
    pub get_adapter_balances: String,
    pub get_protocol_balances: String,
    pub get_protocol_names: String,
    pub get_token_adapter_names: String,
    pub get_protocol_adapters: String,
    pub get_token_adapter: String,
    pub get_full_token_balance: String,
    pub get_final_full_token_balance: String,
}

impl Selectors {
    pub fn new() -> Self {
        Selectors {
            get_balances: selector("getBalances(address)"),
            get_adapter_balances: selector("getAdapterBalances(address,address[])"),
            get_protocol_balances: selector("getProtocolBalances(address,string[])"),
            get_protocol_names: selector("getProtocolNames()"),
            get_token_adapter_names: selector("getTokenAdapterNames()"),
            get_protocol_adapters: selector("getProtocolAdapters(string)"),
            get_token_adapter: selector("getTokenAdapter(string)"),
            get_full_token_balance: selector("getFullTokenBalance(string,address)"),
            get_final_full_token_balance: selector("getFinalFullTokenBalance(string,address)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_known_values() {
        assert_eq!(selector("transfer(address,uint256)"), "0xa9059cbb");
        assert_eq!(selector("balanceOf(address)"), "0x70a08231");
    }

    #[test]
    fn address_words_are_left_padded() {
        assert_eq!(
            address_word("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
            format!("{}{}", "0".repeat(24), "a".repeat(40))
        );
    }

    #[test]
    fn string_args_carry_length_then_aligned_data() {
        let words = string_words("Aave");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0], uint_word(4));
        assert_eq!(words[1], format!("{:0<64}", "41617665"));

        // 33 bytes spill into a second data word
        let long = string_words(&"a".repeat(33));
        assert_eq!(long.len(), 3);
        assert_eq!(long[0], uint_word(33));
    }

    #[test]
    fn single_string_call_data_layout() {
        let data = with_string_arg("0x12345678", "Aave");
        assert_eq!(
            data,
            format!(
                "0x12345678{}{}{:0<64}",
                uint_word(32),
                uint_word(4),
                "41617665"
            )
        );
    }

    #[test]
    fn adapter_ids_end_with_the_kind_digit() {
        let id = adapter_id("Aave", AdapterKind::Asset);
        assert_eq!(id.len(), 66);
        assert!(id.starts_with("0x41617665"));
        assert!(id.ends_with('1'));
        assert!(adapter_id("Aave", AdapterKind::Debt).ends_with('2'));
    }

    #[test]
    fn addresses_are_normalized() {
        assert_eq!(
            normalize_address("AB904210AD62C347Ab0D6c4B4CfF02aE78eec6bb"),
            "0xab904210ad62c347ab0d6c4b4cff02ae78eec6bb"
        );
        assert_eq!(normalize_address("0xAB"), "0xab");
    }
}

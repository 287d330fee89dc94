//! Scalar decoders over single 32-byte words.
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};

use super::Word;
use crate::error::DecodeError;

/// Interprets a word as a big-endian unsigned 256-bit integer.
pub fn to_uint(word: &Word) -> BigUint {
    BigUint::from_bytes_be(word)
}

/// Interprets a word as a two's complement signed 256-bit integer.
pub fn to_int(word: &Word) -> BigInt {
    let unsigned = BigInt::from_bytes_be(Sign::Plus, word);
    if word[0] >= 0x80 {
        unsigned - (BigInt::from(1) << 256)
    } else {
        unsigned
    }
}

/// Exact fixed-point value `to_uint(word) / 10^scale`, built from the
/// integer's digits and a negative exponent rather than through binary
/// floating point.
pub fn to_decimal(word: &Word, scale: i64) -> BigDecimal {
    BigDecimal::new(BigInt::from(to_uint(word)), scale)
}

/// True iff the word is non-zero.
pub fn to_bool(word: &Word) -> bool {
    word.iter().any(|byte| *byte != 0)
}

/// The low 20 bytes as a lower-case `0x`-prefixed address. High bytes are
/// padding and ignored whatever their content.
pub fn to_address(word: &Word) -> String {
    format!("0x{}", hex::encode(&word[12..]))
}

pub fn to_u64(word: &Word, context: &'static str) -> Result<u64, DecodeError> {
    if word[..24].iter().any(|byte| *byte != 0) {
        return Err(DecodeError::ArithmeticOverflow(context));
    }
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&word[24..]);
    Ok(u64::from_be_bytes(tail))
}

pub fn to_u32(word: &Word, context: &'static str) -> Result<u32, DecodeError> {
    u32::try_from(to_u64(word, context)?).map_err(|_| DecodeError::ArithmeticOverflow(context))
}

/// Word as a usize, for offset and length arithmetic.
pub fn to_usize(word: &Word, context: &'static str) -> Result<usize, DecodeError> {
    usize::try_from(to_u64(word, context)?).map_err(|_| DecodeError::ArithmeticOverflow(context))
}

//! Length-prefixed UTF-8 string decoding.
use super::{words, Word};
use crate::error::DecodeError;

/// Decodes a window holding one string: a byte-length word followed by the
/// left-aligned bytes themselves.
pub fn decode(window: &[Word], context: &'static str) -> Result<String, DecodeError> {
    let length = words::to_usize(super::word_at(window, 0, context)?, context)?;
    let data: Vec<u8> = window[1..].iter().flatten().copied().collect();
    if length > data.len() {
        return Err(DecodeError::InvalidText(
            context,
            format!(
                "declared length {} exceeds the {} available bytes",
                length,
                data.len()
            ),
        ));
    }

    String::from_utf8(data[..length].to_vec())
        .map_err(|e| DecodeError::InvalidText(context, e.to_string()))
}

//! Decoding of ABI-encoded `eth_call` return payloads.
//!
//! A payload is a flat sequence of 32-byte words. Decoders operate over
//! *windows*: contiguous word slices bounding exactly one encoded value.
//! Head-word offsets resolve relative to the current window, never to the
//! whole stream. Every entity kind hardcodes its own head layout; there is no
//! general type schema.
use crate::error::DecodeError;

pub use self::array::ElementKind;

pub mod array;
pub mod entity;
pub mod text;
pub mod words;

/// A single 32-byte unit of an encoded payload.
pub type Word = [u8; 32];

const WORD_BYTES: usize = 32;

/// Strips the `0x` prefix if present.
pub fn strip_hex_prefix(payload: &str) -> &str {
    payload.strip_prefix("0x").unwrap_or(payload)
}

/// Splits a hex payload into its 32-byte words.
pub fn split_words(payload: &str) -> Result<Vec<Word>, DecodeError> {
    let bytes = hex::decode(strip_hex_prefix(payload))
        .map_err(|e| DecodeError::MalformedPayload(e.to_string()))?;
    if bytes.len() % WORD_BYTES != 0 {
        return Err(DecodeError::MalformedPayload(format!(
            "payload length {} is not a multiple of 32 bytes",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|chunk| {
            let mut word = [0u8; WORD_BYTES];
            word.copy_from_slice(chunk);
            word
        })
        .collect())
}

pub(crate) fn word_at<'a>(
    window: &'a [Word],
    index: usize,
    context: &'static str,
) -> Result<&'a Word, DecodeError> {
    window.get(index).ok_or(DecodeError::OffsetOutOfRange {
        context,
        offset: index,
        len: window.len(),
    })
}

/// Reads the head word at `index` as a word-index into the current window.
pub(crate) fn location_at(
    window: &[Word],
    index: usize,
    context: &'static str,
) -> Result<usize, DecodeError> {
    Ok(words::to_usize(word_at(window, index, context)?, context)? / WORD_BYTES)
}

pub(crate) fn slice_from<'a>(
    window: &'a [Word],
    start: usize,
    context: &'static str,
) -> Result<&'a [Word], DecodeError> {
    window.get(start..).ok_or(DecodeError::OffsetOutOfRange {
        context,
        offset: start,
        len: window.len(),
    })
}

pub(crate) fn slice_range<'a>(
    window: &'a [Word],
    start: usize,
    end: usize,
    context: &'static str,
) -> Result<&'a [Word], DecodeError> {
    window
        .get(start..end)
        .ok_or(DecodeError::OffsetOutOfRange {
            context,
            offset: end.max(start),
            len: window.len(),
        })
}

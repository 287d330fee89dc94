//! Offset-resolving decoder for head-prefixed dynamic arrays.
use super::{words, Word};
use crate::error::DecodeError;

/// How an encoded array lays out its elements.
///
/// `Static` elements have a uniform fixed width and sit contiguously after
/// the length word. `Dynamic` elements are variable-size and reached through
/// per-element offset words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Static,
    Dynamic,
}

/// Decodes a window holding a dynamic array, applying `element` to each
/// element's sub-window in on-chain return order.
///
/// The window's first word is an indirection to the length word. Element
/// offsets are relative to the current window, and the last element always
/// runs to the end of the window: the encoding carries no terminator, so its
/// end can only be inferred from the next element's offset, or the window
/// boundary for the tail.
pub fn decode<T, F>(
    window: &[Word],
    kind: ElementKind,
    context: &'static str,
    element: F,
) -> Result<Vec<T>, DecodeError>
where
    F: Fn(&[Word]) -> Result<T, DecodeError>,
{
    if window.is_empty() {
        return Ok(Vec::new());
    }

    let head = words::to_usize(&window[0], context)? / 32;
    let length = words::to_usize(super::word_at(window, head, context)?, context)?;
    if length == 0 {
        return Ok(Vec::new());
    }

    let offsets = match kind {
        ElementKind::Dynamic => {
            let mut offsets = Vec::with_capacity(length);
            for i in 0..length {
                let offset_word = super::word_at(window, head + 1 + i, context)?;
                offsets.push(words::to_usize(offset_word, context)? / 32);
            }
            offsets
        }
        ElementKind::Static => (0..length).collect(),
    };

    let mut elements = Vec::with_capacity(length);
    for (i, offset) in offsets.iter().enumerate() {
        let start = head + 1 + offset;
        let slice = match offsets.get(i + 1) {
            Some(next) => super::slice_range(window, start, head + 1 + next, context)?,
            None => super::slice_from(window, start, context)?,
        };
        elements.push(element(slice)?);
    }

    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{split_words, text, word_at};

    fn uint(value: u64) -> String {
        format!("{:064x}", value)
    }

    fn offset(word_index: usize) -> String {
        uint((word_index * 32) as u64)
    }

    fn window(words: &[String]) -> Vec<Word> {
        split_words(&words.concat()).unwrap()
    }

    fn first_word_uint(slice: &[Word]) -> Result<u64, DecodeError> {
        words::to_u64(word_at(slice, 0, "element")?, "element")
    }

    #[test]
    fn empty_array_reads_no_element_words() {
        let encoded = window(&[offset(1), uint(0)]);
        let decoded = decode(&encoded, ElementKind::Dynamic, "t", |_| {
            panic!("no element should be decoded")
        });
        assert_eq!(decoded, Ok(Vec::<()>::new()));
    }

    #[test]
    fn empty_window_is_an_empty_sequence() {
        let decoded: Vec<u64> = decode(&[], ElementKind::Dynamic, "t", first_word_uint).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn static_elements_sit_after_the_length_word() {
        let encoded = window(&[offset(1), uint(3), uint(7), uint(8), uint(9)]);
        let decoded = decode(&encoded, ElementKind::Static, "t", first_word_uint).unwrap();
        assert_eq!(decoded, vec![7, 8, 9]);
    }

    #[test]
    fn dynamic_last_element_runs_to_end_of_window() {
        // three strings; only the first two ends are implied by next offsets,
        // the third must consume all remaining words
        let strings = ["aa", "bb", "the last element spans two whole words!!"];
        let mut encoded = vec![offset(1), uint(3)];
        let mut tails: Vec<String> = Vec::new();
        let mut position = 3; // element heads occupy words 2..5
        for value in strings {
            encoded.push(offset(position));
            let data = hex::encode(value.as_bytes());
            let padded = (data.len() + 63) / 64 * 64;
            tails.push(uint(value.len() as u64));
            tails.push(format!("{:0<width$}", data, width = padded));
            position += 1 + padded / 64;
        }
        encoded.extend(tails);

        let decoded = decode(&window(&encoded), ElementKind::Dynamic, "t", |w| {
            text::decode(w, "t")
        })
        .unwrap();
        assert_eq!(decoded, strings);
    }

    #[test]
    fn length_word_outside_window_is_rejected() {
        let encoded = window(&[offset(9), uint(1)]);
        let result = decode(&encoded, ElementKind::Dynamic, "t", first_word_uint);
        assert!(matches!(result, Err(DecodeError::OffsetOutOfRange { .. })));
    }

    #[test]
    fn element_offset_outside_window_is_rejected() {
        let encoded = window(&[offset(1), uint(1), offset(40)]);
        let result = decode(&encoded, ElementKind::Dynamic, "t", first_word_uint);
        assert!(matches!(result, Err(DecodeError::OffsetOutOfRange { .. })));
    }
}

use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeResult};
use std::collections::HashSet;

const C_FACTOR: u8 = 0xC0;
const DC_FACTOR: u16 = 0x3FFF;

/// Decodes the name at the cursor, following compression pointers, and joins
/// the labels with dots.
///
/// The cursor ends right after the name's own encoding: after the zero byte, or
/// after the two pointer bytes. Labels read behind a pointer are read through
/// separate views and never move it.
///
/// A pointer to the root name adds no labels, so `www` + pointer-to-root is
/// `www`, not `www.`.
pub fn unzip_domain(cursor: &mut Cursor) -> DecodeResult<String> {
    let mut labels = Vec::new();
    let mut next = parse_labels(cursor, &mut labels)?;
    let mut visited = HashSet::new();
    while let Some(offset) = next {
        if !visited.insert(offset) {
            return Err(DecodeError::CompressionPointerCycle { offset });
        }
        trace!("following compression pointer to offset {}", offset);
        let mut view = cursor.view_at(offset)?;
        next = parse_labels(&mut view, &mut labels)?;
    }
    Ok(labels.join("."))
}

/// Reads labels until the terminating zero byte (`None`) or a pointer, whose
/// target offset is returned. A pointer always ends the run.
fn parse_labels(cursor: &mut Cursor, labels: &mut Vec<String>) -> DecodeResult<Option<usize>> {
    loop {
        let seg_len = cursor.take()?;
        if seg_len >= C_FACTOR {
            cursor.move_to(-1)?;
            let pointer = cursor.take_u16()? & DC_FACTOR;
            return Ok(Some(pointer as usize));
        }
        if seg_len == 0 {
            return Ok(None);
        }
        let segment = cursor.take_slice(seg_len as usize)?;
        labels.push(String::from_utf8_lossy(segment).into_owned());
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::Cursor;
    use crate::error::DecodeError;
    use crate::protocol::name::unzip_domain;

    fn www_example_com() -> Vec<u8> {
        vec![3, b'w', b'w', b'w', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0]
    }

    #[test]
    fn should_join_labels_when_call_unzip_domain_given_uncompressed_name() {
        let bytes = www_example_com();
        let mut cursor = Cursor::from(bytes.as_slice());

        let result = unzip_domain(&mut cursor).unwrap();

        assert_eq!("www.example.com", result);
        assert_eq!(17, cursor.get_current_index())
    }

    #[test]
    fn should_return_empty_name_when_call_unzip_domain_given_root() {
        let bytes = [0u8];
        let mut cursor = Cursor::from(&bytes[..]);

        let result = unzip_domain(&mut cursor).unwrap();

        assert_eq!("", result);
        assert_eq!(1, cursor.get_current_index())
    }

    #[test]
    fn should_match_expanded_form_when_call_unzip_domain_given_pointer_suffix() {
        // "example.com" at 0, then "www" + pointer to 0 at 13
        let mut bytes = www_example_com()[4..].to_vec();
        bytes.extend(&[3, b'w', b'w', b'w', 0xC0, 0x00]);
        let mut cursor = Cursor::from(bytes.as_slice());
        cursor.at(13).unwrap();

        let result = unzip_domain(&mut cursor).unwrap();

        let expanded = www_example_com();
        let expected = unzip_domain(&mut Cursor::from(expanded.as_slice())).unwrap();
        assert_eq!(expected, result);
        assert_eq!(19, cursor.get_current_index())
    }

    #[test]
    fn should_follow_chain_when_call_unzip_domain_given_pointer_to_pointer() {
        let mut bytes = vec![3, b'c', b'o', b'm', 0];
        bytes.extend(&[7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0xC0, 0x00]);
        bytes.extend(&[0xC0, 0x05]);
        let mut cursor = Cursor::from(bytes.as_slice());
        cursor.at(15).unwrap();

        let result = unzip_domain(&mut cursor).unwrap();

        assert_eq!("example.com", result);
        assert_eq!(17, cursor.get_current_index())
    }

    #[test]
    fn should_add_no_labels_when_call_unzip_domain_given_pointer_to_root() {
        let bytes = [0u8, 3, b'w', b'w', b'w', 0xC0, 0x00];
        let mut cursor = Cursor::from(&bytes[..]);
        cursor.at(1).unwrap();

        let result = unzip_domain(&mut cursor).unwrap();

        assert_eq!("www", result)
    }

    #[test]
    fn should_return_cycle_error_when_call_unzip_domain_given_self_pointer() {
        let bytes = [0xC0u8, 0x00];
        let mut cursor = Cursor::from(&bytes[..]);

        let result = unzip_domain(&mut cursor);

        assert_eq!(Err(DecodeError::CompressionPointerCycle { offset: 0 }), result)
    }

    #[test]
    fn should_return_cycle_error_when_call_unzip_domain_given_two_pointers_to_each_other() {
        let bytes = [1u8, b'a', 0xC0, 0x04, 1, b'b', 0xC0, 0x00];
        let mut cursor = Cursor::from(&bytes[..]);

        let result = unzip_domain(&mut cursor);

        assert_eq!(Err(DecodeError::CompressionPointerCycle { offset: 4 }), result)
    }

    #[test]
    fn should_return_invalid_offset_when_call_unzip_domain_given_pointer_past_end() {
        let bytes = [0xC0u8, 0x20];
        let mut cursor = Cursor::from(&bytes[..]);

        let result = unzip_domain(&mut cursor);

        assert_eq!(Err(DecodeError::InvalidOffset { offset: 0x20, len: 2 }), result)
    }

    #[test]
    fn should_return_truncated_input_when_call_unzip_domain_given_pointer_to_buffer_end() {
        let bytes = [0xC0u8, 0x02];
        let mut cursor = Cursor::from(&bytes[..]);

        let result = unzip_domain(&mut cursor);

        assert_eq!(Err(DecodeError::TruncatedInput { offset: 2, needed: 1, remaining: 0 }), result)
    }

    #[test]
    fn should_return_truncated_input_when_call_unzip_domain_given_short_label() {
        let bytes = [5u8, b'a', b'b'];
        let mut cursor = Cursor::from(&bytes[..]);

        let result = unzip_domain(&mut cursor);

        assert_eq!(Err(DecodeError::TruncatedInput { offset: 1, needed: 5, remaining: 2 }), result)
    }

    #[test]
    fn should_return_truncated_input_when_call_unzip_domain_given_missing_terminator() {
        let bytes = [1u8, b'a'];
        let mut cursor = Cursor::from(&bytes[..]);

        let result = unzip_domain(&mut cursor);

        assert_eq!(Err(DecodeError::TruncatedInput { offset: 2, needed: 1, remaining: 0 }), result)
    }
}

//! Best-effort DNS query extraction
//!
//! Only the textual shape of the first query name is wanted; label
//! lengths are rendered as dots rather than decoded, and compression
//! pointers are not followed.

/// DNS fixed header size
pub const HEADER_LEN: usize = 12;

/// Longest query text recorded
pub const QUERY_TEXT_MAX: usize = 127;

/// QR bit of the flags field; set means response
const FLAG_RESPONSE: u16 = 0x8000;

/// Extract the query-name region of a DNS query as loose text.
///
/// Requires at least the 12-byte header plus one name byte, the QR bit
/// clear, and a non-zero question count. Bytes below ASCII space
/// (label lengths included) become `.`; extraction stops at a zero
/// byte, at [`QUERY_TEXT_MAX`] bytes, or at the end of `payload`.
/// Returns `None` when the gates fail or nothing was extracted.
pub fn extract_query(payload: &[u8]) -> Option<String> {
    if payload.len() < HEADER_LEN + 1 {
        return None;
    }

    let flags = u16::from_be_bytes([payload[2], payload[3]]);
    if flags & FLAG_RESPONSE != 0 {
        return None;
    }

    let questions = u16::from_be_bytes([payload[4], payload[5]]);
    if questions == 0 {
        return None;
    }

    let mut text = String::new();
    for &b in payload[HEADER_LEN..].iter().take(QUERY_TEXT_MAX) {
        if b == 0 {
            break;
        }
        if b < b' ' {
            text.push('.');
        } else {
            text.push(b as char);
        }
    }

    if text.is_empty() {
        return None;
    }

    Some(text)
}

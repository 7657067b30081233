//! # Hex Encoding and Dump Utilities
//!
//! This module provides the hex rendering used by the dump macros and the CLI:
//! row-oriented hex dumps, MAC address rendering, and plain encode/decode helpers.
//!
//! ## Dump layout
//!
//! Each row covers 16 bytes and starts with an 8-digit offset. A `" :"` marker
//! splits the row after the eighth byte:
//!
//! ```text
//! 00000000: 00 01 02 03 04 05 06 07 : 08 09 0a 0b 0c 0d 0e 0f
//! 00000010: 10 11
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use taglog_rs::util::hex::{format_hex_dump, format_mac};
//!
//! let dump = format_hex_dump(&[0x68, 0x31, 0x31, 0x68]);
//! assert_eq!(dump, "00000000: 68 31 31 68\n");
//!
//! assert_eq!(format_mac(&[0, 0x1b, 0x44, 0x11, 0x3a, 0xb7]), "00:1b:44:11:3a:b7");
//! ```

use crate::error::DebugLogError;
use std::fmt::Write;

/// Bytes rendered per dump row
pub const ROW_LEN: usize = 16;

/// Returned by [`format_mac`] for input that is not six bytes long
pub const NOT_MAC_ADDRESS: &str = "NOT MAC ADDRESS";

const MAC_LEN: usize = 6;

/// Render one dump row: offset, colon, then the bytes with a mid-row marker.
fn render_row(offset: usize, chunk: &[u8]) -> String {
    let mut row = String::with_capacity(10 + chunk.len() * 3 + 2);
    // Writing into a String cannot fail.
    let _ = write!(row, "{offset:08x}:");
    for (i, byte) in chunk.iter().enumerate() {
        if i == ROW_LEN / 2 {
            row.push_str(" :");
        }
        let _ = write!(row, " {byte:02x}");
    }
    row
}

/// Iterate over the rows of a hex dump, without line terminators.
///
/// The logger flushes these one at a time; [`format_hex_dump`] joins them.
pub fn hex_dump_rows(data: &[u8]) -> impl Iterator<Item = String> + '_ {
    data.chunks(ROW_LEN)
        .enumerate()
        .map(|(i, chunk)| render_row(i * ROW_LEN, chunk))
}

/// Render a full hex dump.
///
/// Rows are separated by `\n`. A trailing `\n` follows only a partial last
/// row, so a dump of a multiple of 16 bytes ends right after its last byte.
/// Empty input renders as the empty string.
pub fn format_hex_dump(data: &[u8]) -> String {
    let rows = (data.len() + ROW_LEN - 1) / ROW_LEN;
    let mut out = String::with_capacity(rows * (10 + ROW_LEN * 3 + 3));
    for (i, row) in hex_dump_rows(data).enumerate() {
        if i != 0 {
            out.push('\n');
        }
        out.push_str(&row);
    }
    if data.len() % ROW_LEN != 0 {
        out.push('\n');
    }
    out
}

/// Render a MAC address as six lowercase colon-separated groups.
///
/// Anything other than exactly six bytes yields [`NOT_MAC_ADDRESS`].
pub fn format_mac(data: &[u8]) -> String {
    if data.len() != MAC_LEN {
        return NOT_MAC_ADDRESS.to_string();
    }
    data.iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(":")
}

/// Encode bytes to lowercase hex string
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode hex string to bytes
///
/// Accepts both uppercase and lowercase hex characters. Whitespace and the
/// common `:` / `-` separators are stripped first, so a MAC address in its
/// usual notation decodes directly.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, DebugLogError> {
    let cleaned: String = hex_str
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();

    if cleaned.is_empty() {
        return Err(DebugLogError::InvalidHex("empty input".to_string()));
    }

    hex::decode(&cleaned).map_err(|e| DebugLogError::InvalidHex(e.to_string()))
}

//! # Utility Modules
//!
//! Pure formatting helpers used by the logger: hex dumps, MAC rendering and
//! hex encoding/decoding.

pub mod hex;

// Re-export commonly used functions
pub use hex::{decode_hex, encode_hex, format_hex_dump, format_mac, hex_dump_rows};

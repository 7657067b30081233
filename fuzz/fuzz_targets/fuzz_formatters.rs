#![no_main]

use libfuzzer_sys::fuzz_target;
use taglog_rs::util::hex::{decode_hex, format_hex_dump, format_mac, ROW_LEN};

fuzz_target!(|data: &[u8]| {
    let dump = format_hex_dump(data);
    assert_eq!(dump.lines().count(), (data.len() + ROW_LEN - 1) / ROW_LEN);

    let _ = format_mac(data);

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = decode_hex(text);
    }
});

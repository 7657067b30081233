//! Property and layout tests for the hex dump and MAC formatters.

use proptest::prelude::*;
use taglog_rs::util::hex::{format_hex_dump, format_mac, hex_dump_rows, NOT_MAC_ADDRESS, ROW_LEN};

/// Counts the byte groups on one dump line (the offset and marker excluded).
fn byte_groups(line: &str) -> usize {
    line.split_once(':')
        .map(|(_, rest)| rest.split_whitespace().filter(|t| *t != ":").count())
        .unwrap_or(0)
}

/// A three-row dump matches the layout byte for byte.
#[test]
fn test_three_row_layout() {
    let data: Vec<u8> = (0u8..40).collect();
    let expected = "\
00000000: 00 01 02 03 04 05 06 07 : 08 09 0a 0b 0c 0d 0e 0f
00000010: 10 11 12 13 14 15 16 17 : 18 19 1a 1b 1c 1d 1e 1f
00000020: 20 21 22 23 24 25 26 27
";
    assert_eq!(format_hex_dump(&data), expected);
}

/// Rows from the iterator are the dump lines without terminators.
#[test]
fn test_rows_match_dump() {
    let data: Vec<u8> = (0u8..=255).collect();
    let rows: Vec<String> = hex_dump_rows(&data).collect();
    let dump = format_hex_dump(&data);
    assert_eq!(rows.len(), 16);
    assert_eq!(dump, rows.join("\n"));
    assert!(!dump.ends_with('\n'));
}

/// Only a partial last row is followed by a newline.
#[test]
fn test_trailing_newline_only_after_partial_row() {
    let full = format_hex_dump(&[0xaa; 16]);
    assert_eq!(full, "00000000: aa aa aa aa aa aa aa aa : aa aa aa aa aa aa aa aa");

    let two = format_hex_dump(&[0xaa; 32]);
    assert_eq!(two.lines().count(), 2);
    assert_eq!(two.matches('\n').count(), 1);
    assert!(!two.ends_with('\n'));

    let partial = format_hex_dump(&[0xaa; 17]);
    assert_eq!(
        partial,
        "00000000: aa aa aa aa aa aa aa aa : aa aa aa aa aa aa aa aa\n00000010: aa\n"
    );
}

proptest! {
    #[test]
    fn prop_line_count_and_groups(data in proptest::collection::vec(any::<u8>(), 0..=64)) {
        let dump = format_hex_dump(&data);
        let lines: Vec<&str> = dump.lines().collect();

        prop_assert_eq!(lines.len(), (data.len() + ROW_LEN - 1) / ROW_LEN);
        prop_assert_eq!(dump.ends_with('\n'), data.len() % ROW_LEN != 0);
        if let Some((last, full)) = lines.split_last() {
            for line in full {
                prop_assert_eq!(byte_groups(line), ROW_LEN);
            }
            let tail = data.len() - full.len() * ROW_LEN;
            prop_assert_eq!(byte_groups(last), tail);
        }
    }

    #[test]
    fn prop_mac_six_bytes(data in proptest::array::uniform6(any::<u8>())) {
        let mac = format_mac(&data);
        let groups: Vec<&str> = mac.split(':').collect();
        prop_assert_eq!(groups.len(), 6);
        for group in groups {
            prop_assert_eq!(group.len(), 2);
            prop_assert!(group.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn prop_mac_wrong_length(data in proptest::collection::vec(any::<u8>(), 0..32)) {
        prop_assume!(data.len() != 6);
        prop_assert_eq!(format_mac(&data), NOT_MAC_ADDRESS);
    }
}

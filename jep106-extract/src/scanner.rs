//! Line scanner for JEP106 table rows
//!
//! Extracted PDF text lays out each manufacturer row as:
//!
//! ```text
//! 1 AMD                 <- continuation marker, space, name
//! 1                     <- eight bit-column lines, one digit and a space each
//! 0
//! ...
//! 01                    <- hex ID
//! ```
//!
//! A long name may wrap onto one extra line before the bit columns. The
//! scanner walks the text line by line and tries the longest name form first.

use crate::config::ScanConfig;
use crate::types::RawRecord;

/// Scan extracted PDF text for table rows, in document order
pub fn scan_records(text: &str, config: &ScanConfig) -> Vec<RawRecord> {
    let lines: Vec<&str> = text.lines().collect();
    let mut records = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        match match_row(&lines, index, config) {
            Some((record, consumed)) => {
                log::trace!(
                    "Row at line {}: marker={} id=0x{:02X} name={:?}",
                    index + 1,
                    record.marker,
                    record.id,
                    record.name
                );
                records.push(record);
                index += consumed;
            }
            None => index += 1,
        }
    }

    log::debug!("Scanned {} lines, matched {} rows", lines.len(), records.len());
    records
}

/// Remove embedded line breaks and surrounding whitespace from a captured field
pub fn normalize_name(raw: &str) -> String {
    raw.replace('\n', "").trim().to_string()
}

/// Try to match a row starting at `start`; returns the record and the number of lines used
fn match_row(lines: &[&str], start: usize, config: &ScanConfig) -> Option<(RawRecord, usize)> {
    let (marker, first_name_line) = parse_start_line(lines[start])?;

    for name_lines in (1..=config.max_name_lines).rev() {
        let skip_start = start + name_lines;
        let id_line = skip_start + config.skip_lines;
        if id_line >= lines.len() {
            continue;
        }

        let continuation = &lines[start + 1..skip_start];
        if continuation.iter().any(|line| line.is_empty()) {
            continue;
        }
        if !lines[skip_start..id_line].iter().all(|line| is_skip_line(line)) {
            continue;
        }
        let Some(id) = parse_hex_id(lines[id_line]) else {
            continue;
        };

        let mut raw_name = first_name_line.to_string();
        for line in continuation {
            raw_name.push('\n');
            raw_name.push_str(line);
        }

        let record = RawRecord::new(normalize_name(marker), normalize_name(&raw_name), id);
        return Some((record, id_line - start + 1));
    }

    None
}

/// Split `"<digits> <rest>"` into marker and the rest of the line
fn parse_start_line(line: &str) -> Option<(&str, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let rest = line[digits..].strip_prefix(' ')?;
    if rest.is_empty() {
        return None;
    }

    Some((&line[..digits], rest))
}

/// A bit-column line is exactly one digit followed by a space
fn is_skip_line(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_digit() && bytes[1] == b' '
}

/// Byte value of the leading two uppercase hex digits of a line
fn parse_hex_id(line: &str) -> Option<u8> {
    let digits = line.get(..2)?;
    if !digits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

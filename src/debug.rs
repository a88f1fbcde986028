//! Hex dump for inspecting raw tag payloads.

use std::fmt::Write;

/// Bytes shown per line
const WIDTH: usize = 16;

/// Render `data` as offset, hex pairs and printable ASCII, 16 bytes a line.
///
/// ```text
///      0 : 45 78 69 66 00 00 4d 4d 00 2a 00 00 00 08 00 0b [Exif..MM.*......]
/// ```
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::new();

    for (line, chunk) in data.chunks(WIDTH).enumerate() {
        let encoded = hex::encode(chunk);
        let pairs: Vec<&str> = encoded
            .as_bytes()
            .chunks(2)
            .filter_map(|pair| std::str::from_utf8(pair).ok())
            .collect();

        let printable: String = chunk
            .iter()
            .map(|&b| if (0x20..=0x7E).contains(&b) { b as char } else { '.' })
            .collect();

        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{:6X} : {} [{}]",
            line * WIDTH,
            pairs.join(" "),
            printable
        );
    }

    out
}

//! Hex-plus-ASCII dump of raw messages.

use std::fmt::Write;

const WIDTH: usize = 16;

/// Renders `bytes` as lines of 16 hex pairs followed by their printable
/// characters. The last line is padded with `--`; bytes outside `0x21..=0x7E`
/// show as `.`.
pub fn render(bytes: &[u8]) -> String {
    let mut out = String::new();

    for chunk in bytes.chunks(WIDTH) {
        for byte in chunk {
            let _ = write!(out, "{:02X} ", byte);
        }
        for _ in chunk.len()..WIDTH {
            out.push_str("-- ");
        }

        out.push(' ');
        out.extend(chunk.iter().map(|&b| {
            if (0x21..=0x7E).contains(&b) {
                b as char
            } else {
                '.'
            }
        }));
        out.push('\n');
    }

    out
}

//! Writing any [`AddressableText`] to a byte sink
//!
//! Bytes are written verbatim, one space between words, `\n` after every
//! line (including empty ones). Nothing here knows which view it is reading.

use std::io::{BufWriter, Write};

use crate::error::{KwicError, Result};
use crate::text::AddressableText;

/// Append one line of `text` to `buf`, without the terminator
fn render_line<T: AddressableText + ?Sized>(text: &T, line: usize, buf: &mut Vec<u8>) {
    for word in 1..=text.word_count(line) {
        if word > 1 {
            buf.push(b' ');
        }
        for ch in 1..=text.char_count(line, word) {
            buf.push(text.char_at(line, word, ch));
        }
    }
}

/// Serialize every line of `text` into `out` and flush it
pub fn write_text<T, W>(text: &T, out: W) -> Result<()>
where
    T: AddressableText + ?Sized,
    W: Write,
{
    let mut out = BufWriter::new(out);
    let mut buf = Vec::new();
    for line in 1..=text.line_count() {
        buf.clear();
        render_line(text, line, &mut buf);
        buf.push(b'\n');
        out.write_all(&buf).map_err(KwicError::Write)?;
    }
    out.flush().map_err(KwicError::Write)?;
    tracing::debug!(lines = text.line_count(), "Wrote text");
    Ok(())
}

/// Serialize `text` into memory
pub fn to_bytes<T: AddressableText + ?Sized>(text: &T) -> Vec<u8> {
    let mut buf = Vec::new();
    for line in 1..=text.line_count() {
        render_line(text, line, &mut buf);
        buf.push(b'\n');
    }
    buf
}

/// Each line of `text`, lossily decoded, without terminators
pub fn to_lines<T: AddressableText + ?Sized>(text: &T) -> Vec<String> {
    let mut buf = Vec::new();
    (1..=text.line_count())
        .map(|line| {
            buf.clear();
            render_line(text, line, &mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
        .collect()
}

//! Line reading shared by the file loaders and the console

use std::io::{self, BufRead};

/// One line read from a byte stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// Line text without `\n` or `\r\n`; invalid UTF-8 becomes U+FFFD
    pub text: String,
    /// Whether the bytes were not valid UTF-8
    pub lossy: bool,
}

/// Read one line as raw bytes. `None` means the stream is exhausted.
pub fn read_line_lossy<R: BufRead>(reader: &mut R) -> io::Result<Option<RawLine>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }

    let line = match String::from_utf8(buf) {
        Ok(text) => RawLine { text, lossy: false },
        Err(e) => RawLine {
            text: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            lossy: true,
        },
    };
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_and_strips_endings() {
        let mut reader = Cursor::new(b"first\r\nsecond\nlast".to_vec());

        let first = read_line_lossy(&mut reader).unwrap().unwrap();
        assert_eq!(first.text, "first");
        assert!(!first.lossy);
        assert_eq!(read_line_lossy(&mut reader).unwrap().unwrap().text, "second");
        assert_eq!(read_line_lossy(&mut reader).unwrap().unwrap().text, "last");
        assert!(read_line_lossy(&mut reader).unwrap().is_none());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut reader = Cursor::new(b"Caf\xe9\nnext\n".to_vec());

        let line = read_line_lossy(&mut reader).unwrap().unwrap();
        assert!(line.lossy);
        assert_eq!(line.text, "Caf\u{FFFD}");
        assert_eq!(read_line_lossy(&mut reader).unwrap().unwrap().text, "next");
    }
}

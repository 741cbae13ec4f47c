//! Universal-newline line splitting for `tokenize_lines`.
//!
//! Boundaries are `\n`, `\r\n`, `\r`, `\x0b`, `\x0c`, `\x1c`, `\x1d`, `\x1e`,
//! `\u{85}`, `\u{2028}` and `\u{2029}`. A trailing boundary does not start an
//! extra empty line, and empty input has no lines at all.
//!
//! Each line comes with the byte offset it starts at in the original text.

fn is_line_boundary(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{b}' | '\u{c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Iterator over `(start offset, line)` pairs, terminators excluded.
pub(crate) struct Lines<'a> {
    rest: &'a str,
    start: usize,
}

pub(crate) fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text, start: 0 }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<(usize, &'a str)> {
        if self.rest.is_empty() {
            return None;
        }
        let start = self.start;
        match self.rest.char_indices().find(|&(_, c)| is_line_boundary(c)) {
            Some((at, c)) => {
                let line = &self.rest[..at];
                let mut next = at + c.len_utf8();
                if c == '\r' && self.rest[next..].starts_with('\n') {
                    next += 1;
                }
                self.rest = &self.rest[next..];
                self.start += next;
                Some((start, line))
            }
            None => {
                let line = self.rest;
                self.start += line.len();
                self.rest = "";
                Some((start, line))
            }
        }
    }
}

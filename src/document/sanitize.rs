//! Line sanitizer.
//!
//! Turns raw physical lines into [`LogicalLine`]s: trailing `//` comments are
//! stripped, backslash continuations and unterminated quoted strings are
//! joined, and blank or `#` lines are dropped. Each logical line is numbered
//! after the last physical line that contributed to it.

use tracing::debug;

use crate::types::LogicalLine;

/// Lazily sanitize a sequence of raw lines.
///
/// Never fails: malformed input (including an unterminated quote at the end
/// of the input) is emitted as-is rather than rejected.
pub fn sanitize<I>(lines: I) -> Sanitizer<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Sanitizer::new(lines.into_iter())
}

/// Iterator returned by [`sanitize`].
#[derive(Debug)]
pub struct Sanitizer<I> {
    lines: std::iter::Enumerate<I>,
    pending: Pending,
}

impl<I> Sanitizer<I> {
    fn new(lines: I) -> Self
    where
        I: Iterator,
    {
        Self {
            lines: lines.enumerate(),
            pending: Pending::default(),
        }
    }
}

/// The logical line currently being assembled.
#[derive(Debug, Default)]
struct Pending {
    buffer: String,
    last_line: usize,
    in_quote: bool,
    continues: bool,
}

impl Pending {
    /// Whether a previous physical line left the logical line open.
    const fn is_open(&self) -> bool {
        self.in_quote || self.continues
    }

    fn push(&mut self, fragment: &str, line_number: usize) {
        if !fragment.is_empty() {
            if !self.buffer.is_empty() {
                self.buffer.push(' ');
            }
            self.buffer.push_str(fragment);
        }
        self.last_line = line_number;
    }

    /// At end of input, strip trailing backslashes left by an unfinished
    /// continuation so the emitted text does not read as one when sanitized
    /// again.
    fn drop_dangling_backslashes(&mut self) {
        loop {
            let (head, continues) = split_continuation(&self.buffer);
            if !continues {
                break;
            }
            let len = head.len();
            self.buffer.truncate(len);
        }
    }

    fn take(&mut self) -> Option<LogicalLine> {
        self.in_quote = false;
        self.continues = false;
        if self.buffer.is_empty() {
            return None;
        }
        Some(LogicalLine::new(self.last_line, std::mem::take(&mut self.buffer)))
    }
}

impl<I> Iterator for Sanitizer<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = LogicalLine;

    fn next(&mut self) -> Option<LogicalLine> {
        for (index, raw) in self.lines.by_ref() {
            let line_number = index + 1;
            let raw = raw.as_ref();

            // Inside an open quote every line is text; otherwise blank and
            // `#` lines are skipped, even between backslash continuations.
            if !self.pending.in_quote && is_blank_or_comment(raw) {
                continue;
            }

            if self.pending.is_open() {
                debug!(line_number, in_quote = self.pending.in_quote, "continuing logical line");
            }

            let (stripped, in_quote) = strip_comment(raw, self.pending.in_quote);

            // Comment-only line: dropped without closing a continuation.
            if !in_quote && stripped.trim().is_empty() {
                continue;
            }
            self.pending.in_quote = in_quote;

            let (fragment, continues) = split_continuation(stripped.trim());
            self.pending.continues = continues;
            self.pending.push(fragment, line_number);

            if !self.pending.is_open() {
                if let Some(line) = self.pending.take() {
                    return Some(line);
                }
            }
        }

        if self.pending.in_quote {
            debug!(line_number = self.pending.last_line, "input ended inside a quoted string");
        }
        self.pending.drop_dangling_backslashes();
        self.pending.take()
    }
}

fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Remove a continuation backslash from the end of a trimmed fragment.
///
/// Only an odd run of trailing backslashes continues the line; `\\` is a
/// literal backslash. Whitespace before the backslash is dropped too.
fn split_continuation(fragment: &str) -> (&str, bool) {
    let run = fragment.bytes().rev().take_while(|&b| b == b'\\').count();
    if run % 2 == 1 {
        (fragment[..fragment.len() - 1].trim_end(), true)
    } else {
        (fragment, false)
    }
}

/// Cut `line` at the first `//` outside a quoted string.
///
/// `in_quote` is the quote state carried in from earlier physical lines; the
/// returned flag is the state at the end of the kept text. `\"` does not
/// toggle the state.
fn strip_comment(line: &str, mut in_quote: bool) -> (&str, bool) {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'"') => {
                i += 2;
                continue;
            }
            b'"' => in_quote = !in_quote,
            b'/' if !in_quote && bytes.get(i + 1) == Some(&b'/') => {
                return (&line[..i], in_quote);
            }
            _ => {}
        }
        i += 1;
    }
    (line, in_quote)
}

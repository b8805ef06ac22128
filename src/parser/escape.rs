//! Quoted text handling: stripping delimiters and resolving escapes.
//!
//! Quoted symbols, short strings, and long strings share one escape syntax.
//! An escaped newline is a line continuation and contributes nothing.

use std::fmt;

/// An escape sequence that does not denote a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeError {
    /// Byte offset of the offending backslash within the unquoted body
    pub offset: usize,
    pub message: String,
}

impl EscapeError {
    fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EscapeError {}

/// Strip one layer of `delimiter` from both ends of `text`.
///
/// Returns the text unchanged when it is not delimited.
pub fn strip_delimiters<'a>(text: &'a str, delimiter: &str) -> &'a str {
    if text.len() >= 2 * delimiter.len() {
        if let Some(inner) = text
            .strip_prefix(delimiter)
            .and_then(|s| s.strip_suffix(delimiter))
        {
            return inner;
        }
    }
    text
}

/// Resolve every escape sequence in an unquoted body.
pub fn unescape(body: &str) -> Result<String, EscapeError> {
    if !body.contains('\\') {
        return Ok(body.to_string());
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((_, escaped)) = chars.next() else {
            return Err(EscapeError::new(start, "dangling '\\' at end of text"));
        };
        match escaped {
            '0' => out.push('\0'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'f' => out.push('\u{0C}'),
            'r' => out.push('\r'),
            'v' => out.push('\u{0B}'),
            '"' | '\'' | '?' | '\\' | '/' => out.push(escaped),
            '\n' => {}
            '\r' => {
                if chars.peek().is_some_and(|&(_, c)| c == '\n') {
                    chars.next();
                }
            }
            'x' => out.push(hex_char(&mut chars, 2, start)?),
            'U' => out.push(hex_char(&mut chars, 8, start)?),
            'u' => {
                let code = hex_digits(&mut chars, 4, start)?;
                out.push(utf16_char(code, &mut chars, start)?);
            }
            other => {
                return Err(EscapeError::new(
                    start,
                    format!("invalid escape sequence '\\{other}'"),
                ));
            }
        }
    }
    Ok(out)
}

type Chars<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

fn hex_digits(chars: &mut Chars<'_>, count: usize, start: usize) -> Result<u32, EscapeError> {
    let mut value = 0u32;
    for _ in 0..count {
        let digit = chars
            .next()
            .and_then(|(_, c)| c.to_digit(16))
            .ok_or_else(|| {
                EscapeError::new(start, format!("expected {count} hex digits in escape"))
            })?;
        value = value * 16 + digit;
    }
    Ok(value)
}

fn hex_char(chars: &mut Chars<'_>, count: usize, start: usize) -> Result<char, EscapeError> {
    let code = hex_digits(chars, count, start)?;
    char::from_u32(code)
        .ok_or_else(|| EscapeError::new(start, format!("U+{code:X} is not a valid character")))
}

/// Decode a `\u` escape, pairing a high surrogate with the `\u` escape after it.
fn utf16_char(high: u32, chars: &mut Chars<'_>, start: usize) -> Result<char, EscapeError> {
    if !(0xD800..0xDC00).contains(&high) {
        return char::from_u32(high).ok_or_else(|| {
            EscapeError::new(start, format!("unpaired surrogate U+{high:X}"))
        });
    }
    let is_pair = matches!(chars.next(), Some((_, '\\'))) && matches!(chars.next(), Some((_, 'u')));
    if !is_pair {
        return Err(EscapeError::new(
            start,
            format!("high surrogate U+{high:X} must be followed by a '\\u' low surrogate"),
        ));
    }
    let low = hex_digits(chars, 4, start)?;
    if !(0xDC00..0xE000).contains(&low) {
        return Err(EscapeError::new(
            start,
            format!("U+{low:X} is not a low surrogate"),
        ));
    }
    let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(code)
        .ok_or_else(|| EscapeError::new(start, format!("U+{code:X} is not a valid character")))
}

//! XML character-data escaping.
//!
//! [`escape_xml`] turns arbitrary text into a string that is safe to embed
//! as XML character data. Characters outside the XML character ranges are
//! dropped, reserved characters become entities, line feeds become `<br>`
//! tags, and codepoints at or above 0x80 become hexadecimal numeric
//! character references.
//!
//! The optional whitespace-collapsing mode protects runs of spaces from
//! being collapsed by downstream renderers: every other space within a run
//! is emitted as `&nbsp;`, and spaces adjacent to a line boundary are
//! always emitted as `&nbsp;` so that leading and trailing indentation
//! survives.

use std::borrow::Cow;

/// Non-breaking-space entity used for tabs and protected spaces.
const NBSP: &str = "&nbsp;";

/// Replacement for a line feed.
const LINE_BREAK: &str = "<br>";

/// Check whether a character is inside the allowed XML character ranges.
///
/// Allowed: tab, LF, CR, 0x20-0xD7FF and 0xE000-0xFFFD. Everything else
/// (control characters, noncharacters, supplementary planes) is dropped
/// by [`escape_xml`].
fn is_xml_char(c: char) -> bool {
    let code = c as u32;
    matches!(code, 0x9 | 0xA | 0xD | 0x20..=0xD7FF | 0xE000..=0xFFFD)
}

/// Escape a string for embedding as XML character data.
///
/// Rules are evaluated per character in priority order: characters outside
/// the allowed XML ranges are dropped; `&`, `<` and `>` become entities;
/// a tab becomes `&nbsp;`; a CR that is part of a CRLF pair is dropped
/// (the LF then carries the line break); a LF becomes `<br>`; codepoints
/// at or above 0x80 become `&#x..;` references; everything else passes
/// through unchanged.
///
/// When `collapse_whitespace` is enabled, spaces at odd positions within a
/// run of consecutive spaces, and spaces adjacent to a line boundary, are
/// replaced with `&nbsp;`. The run counter starts at 1 at the beginning of
/// input and resets whenever a non-space character is seen, so a leading
/// space is always protected while the first interior space of a run
/// renders as a plain space.
///
/// Returns `Cow::Borrowed` when no character required replacement.
///
/// # Example
///
/// ```
/// use xmlemit::escape_xml;
///
/// assert_eq!(escape_xml("a < b", false), "a &lt; b");
/// assert_eq!(escape_xml("a  b", true), "a &nbsp;b");
/// ```
pub fn escape_xml(text: &str, collapse_whitespace: bool) -> Cow<'_, str> {
    let mut result: Option<String> = None;
    // Starts at 1 so a space at the very beginning of input counts as odd.
    let mut space_run: usize = 1;

    for (idx, c) in text.char_indices() {
        let mut replacement: Option<Cow<'static, str>> = None;

        if collapse_whitespace && c == ' ' {
            let mut replace = space_run % 2 == 1;
            if !replace {
                // Out-of-range neighbors count as line boundaries.
                let prev = text[..idx].chars().next_back().unwrap_or('\n');
                let mut ahead = text[idx + 1..].chars();
                let next = ahead.next().unwrap_or('\n');
                let next_next = ahead.next().unwrap_or('\n');
                replace = prev == '\n' || next == '\n' || (next == '\r' && next_next == '\n');
            }
            if replace {
                replacement = Some(Cow::Borrowed(NBSP));
            }
            space_run += 1;
        } else {
            space_run = 0;
        }

        // Range filtering takes priority over every entity rule.
        if !is_xml_char(c) {
            replacement = Some(Cow::Borrowed(""));
        } else if c == '&' {
            replacement = Some(Cow::Borrowed("&amp;"));
        } else if c == '<' {
            replacement = Some(Cow::Borrowed("&lt;"));
        } else if c == '>' {
            replacement = Some(Cow::Borrowed("&gt;"));
        } else if c == '\t' {
            replacement = Some(Cow::Borrowed(NBSP));
        } else if c == '\r' {
            // CRLF collapses to the LF's own replacement.
            if text[idx + 1..].starts_with('\n') {
                replacement = Some(Cow::Borrowed(""));
            }
        } else if c == '\n' {
            replacement = Some(Cow::Borrowed(LINE_BREAK));
        } else if c as u32 >= 0x80 {
            replacement = Some(Cow::Owned(format!("&#x{:x};", c as u32)));
        }

        match replacement {
            Some(r) => {
                let buf = result.get_or_insert_with(|| {
                    let mut s = String::with_capacity(text.len() + 16);
                    s.push_str(&text[..idx]);
                    s
                });
                buf.push_str(&r);
            }
            None => {
                if let Some(buf) = result.as_mut() {
                    buf.push(c);
                }
            }
        }
    }

    match result {
        Some(s) => Cow::Owned(s),
        None => Cow::Borrowed(text),
    }
}

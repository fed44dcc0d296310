//! Locating brace-delimited sections.
//!
//! Every LDF section has the shape `Keyword { ... }` and several of them nest
//! further named blocks (`Signal_encoding_types`, `Node_attributes`). All of
//! them are found through [`find_close`], which walks forward tracking brace
//! depth so that nested blocks are skipped.

use crate::{Error, Result, config::ParseConfig};

/// Byte range of a section inside the text it was located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    /// Offset of the section keyword.
    pub keyword_start: usize,
    /// First byte of the body, just after `{`.
    pub start: usize,
    /// Offset of the closing `}` (or end of text for a truncated section).
    pub end: usize,
}

impl SectionRange {
    /// Slice the body out of the text the range was located in.
    pub fn body<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }

    /// Offset just past the closing brace.
    pub fn after(&self, text: &str) -> usize {
        (self.end + 1).min(text.len())
    }
}

/// A named sub-block `Name { ... }` inside a section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Text before the opening brace, trimmed.
    pub name: &'a str,
    /// Text between the braces.
    pub body: &'a str,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Offset of the `{` opening `keyword`'s body.
///
/// The keyword must not continue a longer identifier on either side and may be
/// separated from the brace by whitespace.
fn find_opening(text: &str, keyword: &str) -> Option<usize> {
    if keyword.is_empty() {
        return None;
    }
    for (pos, _) in text.match_indices(keyword) {
        if text[..pos].chars().next_back().is_some_and(is_ident_char) {
            continue;
        }
        let rest = &text[pos + keyword.len()..];
        let trimmed = rest.trim_start();
        if trimmed.starts_with('{') {
            return Some(pos + keyword.len() + (rest.len() - trimmed.len()));
        }
    }
    None
}

/// Offset of the `}` closing a body that starts at `from`.
///
/// Nested `{ ... }` pairs are skipped and braces inside double or single
/// quoted text are ignored. A quote of the other kind inside quoted text is
/// literal. Returns `None` if the text ends first.
pub fn find_close(text: &str, from: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    for (i, b) in text.bytes().enumerate().skip(from) {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'{') => depth += 1,
            (None, b'}') if depth == 0 => return Some(i),
            (None, b'}') => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Locate the body of the first `keyword { ... }` section in `text`.
///
/// # Errors
/// * [`Error::SectionNotFound`] if the keyword followed by `{` does not occur.
/// * [`Error::UnterminatedSection`] if the body is never closed and
///   [`ParseConfig::allow_truncated`] is not set.
pub fn locate(text: &str, keyword: &str, config: &ParseConfig) -> Result<SectionRange> {
    let open = find_opening(text, keyword).ok_or_else(|| Error::SectionNotFound {
        section: keyword.to_string(),
    })?;
    let keyword_start = text[..open]
        .trim_end()
        .len()
        .saturating_sub(keyword.len());
    let start = open + 1;
    match find_close(text, start) {
        Some(end) => Ok(SectionRange {
            keyword_start,
            start,
            end,
        }),
        None if config.allow_truncated => Ok(SectionRange {
            keyword_start,
            start,
            end: text.len(),
        }),
        None => Err(Error::UnterminatedSection {
            section: keyword.to_string(),
            start,
        }),
    }
}

/// Like [`locate`], but a missing section is `Ok(None)`.
pub fn locate_optional(
    text: &str,
    keyword: &str,
    config: &ParseConfig,
) -> Result<Option<SectionRange>> {
    match locate(text, keyword, config) {
        Ok(range) => Ok(Some(range)),
        Err(Error::SectionNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Split a section body into its named sub-blocks, in order.
///
/// A sub-block that is never closed runs to the end of `body`; the enclosing
/// section was already closed, so this only happens for truncated input.
/// Text after the last block is ignored.
pub fn blocks(body: &str) -> Vec<Block<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    while let Some(rel) = body[cursor..].find('{') {
        let open = cursor + rel;
        let end = find_close(body, open + 1).unwrap_or(body.len());
        out.push(Block {
            name: body[cursor..open].trim(),
            body: &body[open + 1..end],
        });
        cursor = (end + 1).min(body.len());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ParseConfig {
        ParseConfig::default()
    }

    #[test]
    fn test_locate_simple() {
        let text = "Nodes { Master: ECU, 5 ms, 0.1 ms; }";
        let range = locate(text, "Nodes", &config()).unwrap();
        assert_eq!(range.keyword_start, 0);
        assert_eq!(range.body(text), " Master: ECU, 5 ms, 0.1 ms; ");
    }

    #[test]
    fn test_locate_without_space() {
        let text = "x; Nodes{A;}";
        let range = locate(text, "Nodes", &config()).unwrap();
        assert_eq!(range.keyword_start, 3);
        assert_eq!(range.body(text), "A;");
    }

    #[test]
    fn test_locate_skips_nested_braces() {
        let text = "Signal_encoding_types {\n  E1 { logical_value, 0, \"OFF\"; }\n  E2 { physical_value, 0, 10; }\n}\nRest { }";
        let range = locate(text, "Signal_encoding_types", &config()).unwrap();
        let body = range.body(text);
        assert!(body.contains("E2"));
        assert!(!body.contains("Rest"));
        assert_eq!(&text[range.end..range.end + 1], "}");
    }

    #[test]
    fn test_locate_requires_word_boundary() {
        let text = "Diagnostic_signals { A; } Signals { B; }";
        let range = locate(text, "signals", &config());
        assert!(matches!(range, Err(Error::SectionNotFound { .. })));
        let range = locate(text, "Signals", &config()).unwrap();
        assert_eq!(range.body(text).trim(), "B;");
    }

    #[test]
    fn test_locate_ignores_keyword_without_brace() {
        let text = "Frames are listed below. Frames { F: 1, M, 2 { S, 0; } }";
        let range = locate(text, "Frames", &config()).unwrap();
        assert!(range.body(text).starts_with(" F: 1"));
    }

    #[test]
    fn test_locate_missing() {
        let err = locate("Nodes { }", "Frames", &config()).unwrap_err();
        assert!(matches!(err, Error::SectionNotFound { section } if section == "Frames"));
    }

    #[test]
    fn test_locate_truncated() {
        let text = "Frames { F: 1, M, 2 { S, 0; }";
        let err = locate(text, "Frames", &config()).unwrap_err();
        assert!(matches!(err, Error::UnterminatedSection { start: 8, .. }));

        let permissive = ParseConfig {
            allow_truncated: true,
            ..ParseConfig::default()
        };
        let range = locate(text, "Frames", &permissive).unwrap();
        assert_eq!(range.end, text.len());
        assert_eq!(range.after(text), text.len());
    }

    #[test]
    fn test_braces_in_quotes() {
        let text = "E { logical_value, 0, \"{weird}\"; } tail }";
        assert_eq!(find_close(text, 3), Some(33));
    }

    #[test]
    fn test_mixed_quotes() {
        let text = "E { logical_value, 0, '5\" panel'; logical_value, 1, \"it's {on}\"; } }";
        assert_eq!(find_close(text, 3), Some(text.len() - 3));
    }

    #[test]
    fn test_locate_optional() {
        assert_eq!(locate_optional("A { }", "B", &config()).unwrap(), None);
        assert!(locate_optional("A { }", "A", &config()).unwrap().is_some());
        assert!(locate_optional("A { ", "A", &config()).is_err());
    }

    #[test]
    fn test_blocks() {
        let body = " Door1 { a = 1; configurable_frames { F1; } } Door2 { b = 2; } ";
        let blocks = blocks(body);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "Door1");
        assert_eq!(blocks[0].body, " a = 1; configurable_frames { F1; } ");
        assert_eq!(blocks[1].name, "Door2");
        assert_eq!(blocks[1].body, " b = 2; ");
    }

    #[test]
    fn test_blocks_empty_body() {
        assert!(blocks("   ").is_empty());
    }
}

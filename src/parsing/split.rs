//! Statement splitting and comment removal.

/// Remove `//` line comments and `/* */` block comments.
///
/// Comment markers inside double or single quoted text are kept. Line
/// comments keep their terminating newline so that statement boundaries are
/// unaffected.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut quote: Option<char> = None;
    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            out.push(c);
            continue;
        }
        match (c, chars.peek()) {
            ('"' | '\'', _) => {
                quote = Some(c);
                out.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    prev = skipped;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }
    out
}

fn without_newlines(body: &str) -> String {
    body.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

fn non_empty(parts: impl Iterator<Item = impl AsRef<str>>) -> Vec<String> {
    parts
        .map(|p| p.as_ref().trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// `;` terminated statements with newlines removed, trimmed, empties dropped.
pub fn statements(body: &str) -> Vec<String> {
    non_empty(without_newlines(body).split(';'))
}

/// Like [`statements`], but with all whitespace removed from each statement.
pub fn compact_statements(body: &str) -> Vec<String> {
    let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    non_empty(compact.split(';'))
}

/// `}` terminated blocks with newlines removed, trimmed, empties dropped.
pub fn brace_blocks(body: &str) -> Vec<String> {
    non_empty(without_newlines(body).split('}'))
}

/// `;` terminated statements where a `;` inside double or single quotes does
/// not end the statement. Inside one kind of quote the other is literal.
pub fn quoted_statements(body: &str) -> Vec<String> {
    let body = without_newlines(body);
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, ';') => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    non_empty(parts.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements() {
        let body = "\n  Sig1, 0;\n  Sig2,\n 8;\n ;  ";
        assert_eq!(statements(body), vec!["Sig1, 0", "Sig2, 8"]);
    }

    #[test]
    fn test_compact_statements() {
        let body = " A : 8 , 0 , ECU ;\n\tB: 1, 0, ECU, Door1;";
        assert_eq!(compact_statements(body), vec!["A:8,0,ECU", "B:1,0,ECU,Door1"]);
    }

    #[test]
    fn test_brace_blocks() {
        let body = "\n F1: 1, M, 2 {\n S1, 0;\n }\n F2: 2, M, 1 { S2, 0; }\n";
        assert_eq!(
            brace_blocks(body),
            vec!["F1: 1, M, 2 { S1, 0;", "F2: 2, M, 1 { S2, 0;"]
        );
    }

    #[test]
    fn test_quoted_statements() {
        let body = "logical_value, 0, \"a;b\";\nlogical_value, 1, \"c\";";
        assert_eq!(
            quoted_statements(body),
            vec!["logical_value, 0, \"a;b\"", "logical_value, 1, \"c\""]
        );
    }

    #[test]
    fn test_quoted_statements_single_quotes() {
        let body = "logical_value, 0, 'a;b'; logical_value, 1, '5\" panel'; logical_value, 2, \"it's; ok\";";
        assert_eq!(
            quoted_statements(body),
            vec![
                "logical_value, 0, 'a;b'",
                "logical_value, 1, '5\" panel'",
                "logical_value, 2, \"it's; ok\"",
            ]
        );
    }

    #[test]
    fn test_strip_comments() {
        let text = "Nodes { // master first\n Master: ECU, 5 ms, 0.1 ms; /* no\n slaves? */ Slaves: A; }";
        let stripped = strip_comments(text);
        assert_eq!(
            stripped,
            "Nodes { \n Master: ECU, 5 ms, 0.1 ms;   Slaves: A; }"
        );
    }

    #[test]
    fn test_strip_comments_keeps_quoted() {
        let text = "X { logical_value, 0, \"http://x\"; }";
        assert_eq!(strip_comments(text), text);
    }

    #[test]
    fn test_strip_comments_keeps_single_quoted() {
        let text = "X { logical_value, 0, 'a // b'; logical_value, 1, '5\" /* x */'; }";
        assert_eq!(strip_comments(text), text);
    }
}

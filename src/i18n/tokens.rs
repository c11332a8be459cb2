//! Token scanning for translated values
//!
//! Splits a value into text, `{name}` placeholders, `{{a | b}}` plural blocks
//! and HTML-like tags. Nothing is substituted here; the scan only exists so
//! bundles can be compared against the reference locale.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// `<name attrs>`, `</name>` or `<name/>` at the start of the input.
/// Quoted attribute values may contain `<` and `>`.
static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^<(/)?([A-Za-z][A-Za-z0-9-]*)(\s(?:[^<>"']|"[^"]*"|'[^']*')*?)?\s*(/)?>"#)
        .expect("tag pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Open,
    Close,
    SelfClosing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: &'a str,
    pub kind: TagKind,
    /// Placeholders used inside attribute values, e.g. `<a href="{url}">`
    pub placeholders: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    /// `{name}`; typed or formatted forms like `{count:number}` keep only the name
    Placeholder { name: &'a str },
    /// `{{1 folder | ?? folders}}`; `??` stands for the count
    Plural {
        forms: Vec<&'a str>,
        /// Placeholders used inside the forms, e.g. `{{1 track by {artist} | ...}}`
        placeholders: Vec<&'a str>,
    },
    Tag(Tag<'a>),
}

/// Errors found while scanning a value. Offsets are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    UnterminatedPlaceholder { offset: usize },
    EmptyPlaceholder { offset: usize },
    InvalidPlaceholderName { offset: usize, name: String },
    UnterminatedPlural { offset: usize },
    EmptyPlural { offset: usize },
    MalformedTag { offset: usize },
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::UnterminatedPlaceholder { offset } => {
                write!(f, "unterminated placeholder at byte {}", offset)
            }
            TokenError::EmptyPlaceholder { offset } => {
                write!(f, "empty placeholder at byte {}", offset)
            }
            TokenError::InvalidPlaceholderName { offset, name } => {
                write!(f, "invalid placeholder name {:?} at byte {}", name, offset)
            }
            TokenError::UnterminatedPlural { offset } => {
                write!(f, "unterminated plural block at byte {}", offset)
            }
            TokenError::EmptyPlural { offset } => {
                write!(f, "empty plural block at byte {}", offset)
            }
            TokenError::MalformedTag { offset } => write!(f, "malformed tag at byte {}", offset),
        }
    }
}

impl std::error::Error for TokenError {}

/// Scan a translated value into tokens
pub fn scan(input: &str) -> Result<Vec<Token<'_>>, TokenError> {
    scan_at(input, 0)
}

fn scan_at(input: &str, base: usize) -> Result<Vec<Token<'_>>, TokenError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let (token, end) = match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => parse_plural(input, i, base)?,
            b'{' => parse_placeholder(input, i, base)?,
            b'<' if bytes
                .get(i + 1)
                .is_some_and(|b| b.is_ascii_alphabetic() || *b == b'/') =>
            {
                parse_tag(input, i, base)?
            }
            _ => {
                i += 1;
                continue;
            }
        };

        if text_start < i {
            tokens.push(Token::Text(&input[text_start..i]));
        }
        tokens.push(token);
        i = end;
        text_start = end;
    }

    if text_start < input.len() {
        tokens.push(Token::Text(&input[text_start..]));
    }

    Ok(tokens)
}

fn parse_plural(input: &str, start: usize, base: usize) -> Result<(Token<'_>, usize), TokenError> {
    let offset = base + start;
    let body_start = start + 2;
    let bytes = input.as_bytes();

    // Forms may hold `{name}` (and `{name|upper}`), so only a `}}` or `|`
    // outside nested braces ends the block or a form.
    let mut depth = 0usize;
    let mut form_starts = vec![body_start];
    let mut close = None;
    let mut i = body_start;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' if depth > 0 => depth -= 1,
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                close = Some(i);
                break;
            }
            b'|' if depth == 0 => form_starts.push(i + 1),
            _ => {}
        }
        i += 1;
    }
    let close = close.ok_or(TokenError::UnterminatedPlural { offset })?;

    let mut forms = Vec::with_capacity(form_starts.len());
    let mut placeholders = Vec::new();
    for (n, &form_start) in form_starts.iter().enumerate() {
        let form_end = form_starts.get(n + 1).map_or(close, |next| next - 1);
        let raw = &input[form_start..form_end];
        let form_tokens = scan_at(raw, base + form_start)?;
        placeholders.extend(placeholder_names(&form_tokens));
        forms.push(raw.trim());
    }
    if forms.iter().all(|f| f.is_empty()) {
        return Err(TokenError::EmptyPlural { offset });
    }

    Ok((
        Token::Plural {
            forms,
            placeholders,
        },
        close + 2,
    ))
}

fn parse_placeholder(
    input: &str,
    start: usize,
    base: usize,
) -> Result<(Token<'_>, usize), TokenError> {
    let offset = base + start;
    let close = input[start + 1..]
        .find('}')
        .ok_or(TokenError::UnterminatedPlaceholder { offset })?;
    let body = &input[start + 1..start + 1 + close];

    // `{count:number}` and `{name|upper}` carry a type or formatter suffix
    let name = body.split([':', '|']).next().unwrap_or_default().trim();
    if name.is_empty() {
        return Err(TokenError::EmptyPlaceholder { offset });
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(TokenError::InvalidPlaceholderName {
            offset,
            name: name.to_string(),
        });
    }

    Ok((Token::Placeholder { name }, start + close + 2))
}

fn parse_tag(input: &str, start: usize, base: usize) -> Result<(Token<'_>, usize), TokenError> {
    let offset = base + start;
    let caps = TAG_RE
        .captures(&input[start..])
        .ok_or(TokenError::MalformedTag { offset })?;
    let whole = caps.get(0).ok_or(TokenError::MalformedTag { offset })?;
    let name = caps.get(2).ok_or(TokenError::MalformedTag { offset })?;

    let kind = if caps.get(1).is_some() {
        TagKind::Close
    } else if caps.get(4).is_some() {
        TagKind::SelfClosing
    } else {
        TagKind::Open
    };

    let mut placeholders = Vec::new();
    if let Some(attrs) = caps.get(3) {
        let attr_tokens = scan_at(
            &input[start + attrs.start()..start + attrs.end()],
            offset + attrs.start(),
        )?;
        placeholders.extend(attr_tokens.into_iter().filter_map(|t| match t {
            Token::Placeholder { name } => Some(name),
            _ => None,
        }));
    }

    let tag = Tag {
        name: &input[start + name.start()..start + name.end()],
        kind,
        placeholders,
    };
    Ok((Token::Tag(tag), start + whole.end()))
}

/// Names of all `{name}` placeholders, including those inside plural forms
/// and tag attributes
pub fn placeholder_names<'a>(tokens: &[Token<'a>]) -> BTreeSet<&'a str> {
    let mut names = BTreeSet::new();
    for token in tokens {
        match token {
            Token::Placeholder { name } => {
                names.insert(*name);
            }
            Token::Plural { placeholders, .. } => names.extend(placeholders.iter().copied()),
            Token::Tag(tag) => names.extend(tag.placeholders.iter().copied()),
            Token::Text(_) => {}
        }
    }
    names
}

/// Number of `{{...}}` plural blocks
pub fn plural_count(tokens: &[Token<'_>]) -> usize {
    tokens
        .iter()
        .filter(|t| matches!(t, Token::Plural { .. }))
        .count()
}

pub fn has_markup(tokens: &[Token<'_>]) -> bool {
    tokens.iter().any(|t| matches!(t, Token::Tag(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_plain_text() {
        assert_eq!(scan("音乐库").unwrap(), vec![Token::Text("音乐库")]);
        assert!(scan("").unwrap().is_empty());
    }

    #[test]
    fn test_scan_placeholder() {
        let tokens = scan("“{text}”的搜索结果").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Text("“"),
                Token::Placeholder { name: "text" },
                Token::Text("”的搜索结果"),
            ]
        );
    }

    #[test]
    fn test_scan_typed_placeholder() {
        let tokens = scan("{count:number} / {name|upper}").unwrap();
        let names: Vec<&str> = placeholder_names(&tokens).into_iter().collect();
        assert_eq!(names, vec!["count", "name"]);
    }

    #[test]
    fn test_scan_plural() {
        let tokens = scan("{{1 folder | ?? folders}}").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Plural {
                forms: vec!["1 folder", "?? folders"],
                placeholders: vec![],
            }]
        );
        assert_eq!(plural_count(&tokens), 1);
        assert!(placeholder_names(&tokens).is_empty());
    }

    #[test]
    fn test_plural_with_nested_placeholders() {
        let tokens = scan("{{1 track by {artist} | ?? tracks by {artist|upper}}}!").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Plural {
                    forms: vec!["1 track by {artist}", "?? tracks by {artist|upper}"],
                    placeholders: vec!["artist", "artist"],
                },
                Token::Text("!"),
            ]
        );
        let names: Vec<&str> = placeholder_names(&tokens).into_iter().collect();
        assert_eq!(names, vec!["artist"]);

        assert_eq!(
            scan("{{1 track | ?? tracks by {artist}}").unwrap_err(),
            TokenError::UnterminatedPlural { offset: 0 }
        );
    }

    #[test]
    fn test_scan_tags() {
        let tokens = scan("Read <b>metadata</b><br/>first").unwrap();
        assert!(has_markup(&tokens));
        let tags: Vec<(&str, TagKind)> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Tag(tag) => Some((tag.name, tag.kind)),
                _ => None,
            })
            .collect();
        assert_eq!(
            tags,
            vec![
                ("b", TagKind::Open),
                ("b", TagKind::Close),
                ("br", TagKind::SelfClosing),
            ]
        );
    }

    #[test]
    fn test_placeholder_inside_attribute() {
        let tokens = scan("<a href=\"{url}\">GitHub</a>").unwrap();
        assert!(placeholder_names(&tokens).contains("url"));
    }

    #[test]
    fn test_quoted_attribute_may_contain_angle_brackets() {
        let tokens = scan("<abbr title=\"a>b\">ab</abbr> {n}").unwrap();
        assert!(matches!(&tokens[0], Token::Tag(tag) if tag.name == "abbr" && tag.kind == TagKind::Open));
        assert_eq!(tokens[1], Token::Text("ab"));
        assert!(placeholder_names(&tokens).contains("n"));
        assert_eq!(
            scan("<abbr title=\"a>b").unwrap_err(),
            TokenError::MalformedTag { offset: 0 }
        );
    }

    #[test]
    fn test_angle_bracket_text_is_not_a_tag() {
        let tokens = scan("bitrate < 128 kbps").unwrap();
        assert!(!has_markup(&tokens));
    }

    #[test]
    fn test_scan_errors() {
        assert_eq!(
            scan("Hello {name").unwrap_err(),
            TokenError::UnterminatedPlaceholder { offset: 6 }
        );
        assert_eq!(
            scan("{ }").unwrap_err(),
            TokenError::EmptyPlaceholder { offset: 0 }
        );
        assert!(matches!(
            scan("{na me}").unwrap_err(),
            TokenError::InvalidPlaceholderName { .. }
        ));
        assert_eq!(
            scan("{{1 folder | ?? folders}").unwrap_err(),
            TokenError::UnterminatedPlural { offset: 0 }
        );
        assert_eq!(
            scan("{{ | }}").unwrap_err(),
            TokenError::EmptyPlural { offset: 0 }
        );
        assert_eq!(
            scan("x <b").unwrap_err(),
            TokenError::MalformedTag { offset: 2 }
        );
        assert_eq!(
            scan("<a href=\"{url\">x</a>").unwrap_err(),
            TokenError::UnterminatedPlaceholder { offset: 9 }
        );
        assert_eq!(
            scan("{{1 | ?? {n}}").unwrap_err(),
            TokenError::UnterminatedPlural { offset: 0 }
        );
    }
}

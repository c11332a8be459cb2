//! Markup carried inside translated values
//!
//! A few keys are rendered as raw HTML by the frontend. Those values are only
//! handed out wrapped in [`TrustedMarkup`], so every place that injects
//! translation text without escaping has to ask for it by name.

use super::tokens::{TagKind, Token, scan};

/// Elements that never take a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "wbr"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A closing tag with nothing open
    UnexpectedClose { tag: String },
    /// A closing tag that does not match the innermost open tag
    Mismatched { expected: String, found: String },
    /// Tags still open at the end of the value
    Unclosed { tags: Vec<String> },
}

impl std::fmt::Display for MarkupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkupError::UnexpectedClose { tag } => write!(f, "unexpected </{}>", tag),
            MarkupError::Mismatched { expected, found } => {
                write!(f, "expected </{}>, found </{}>", expected, found)
            }
            MarkupError::Unclosed { tags } => write!(f, "unclosed <{}>", tags.join(">, <")),
        }
    }
}

impl std::error::Error for MarkupError {}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

/// Check that every opened tag is closed in order
pub fn check_balanced(tokens: &[Token<'_>]) -> Result<(), MarkupError> {
    let mut open: Vec<&str> = Vec::new();

    for token in tokens {
        let Token::Tag(tag) = token else {
            continue;
        };
        if is_void(tag.name) {
            continue;
        }
        match tag.kind {
            TagKind::Open => open.push(tag.name),
            TagKind::SelfClosing => {}
            TagKind::Close => match open.pop() {
                Some(expected) if expected.eq_ignore_ascii_case(tag.name) => {}
                Some(expected) => {
                    return Err(MarkupError::Mismatched {
                        expected: expected.to_string(),
                        found: tag.name.to_string(),
                    });
                }
                None => {
                    return Err(MarkupError::UnexpectedClose {
                        tag: tag.name.to_string(),
                    });
                }
            },
        }
    }

    if open.is_empty() {
        Ok(())
    } else {
        Err(MarkupError::Unclosed {
            tags: open.into_iter().map(str::to_string).collect(),
        })
    }
}

/// Translation text the renderer injects as raw HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustedMarkup(&'static str);

impl TrustedMarkup {
    pub(super) fn new(html: &'static str) -> Self {
        Self(html)
    }

    pub fn as_html(&self) -> &'static str {
        self.0
    }

    /// Text with tags removed, for tooltips or accessibility labels.
    /// `<br>` becomes a newline; placeholders are left as written.
    pub fn to_plain_text(&self) -> String {
        let Ok(tokens) = scan(self.0) else {
            return self.0.to_string();
        };

        let mut out = String::with_capacity(self.0.len());
        for token in &tokens {
            match token {
                Token::Text(text) => out.push_str(text),
                Token::Placeholder { name } => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
                Token::Plural { forms, .. } => {
                    out.push_str("{{");
                    out.push_str(&forms.join(" | "));
                    out.push_str("}}");
                }
                Token::Tag(tag) if tag.name.eq_ignore_ascii_case("br") => out.push('\n'),
                Token::Tag(_) => {}
            }
        }
        out
    }
}

impl std::fmt::Display for TrustedMarkup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced(value: &str) -> Result<(), MarkupError> {
        check_balanced(&scan(value).unwrap())
    }

    #[test]
    fn test_balanced_markup() {
        assert!(balanced("plain").is_ok());
        assert!(balanced("<b>a</b> <i>b</i>").is_ok());
        assert!(balanced("<b><i>nested</i></b>").is_ok());
        assert!(balanced("line<br>break<br/>again<hr>").is_ok());
        assert!(balanced("<a href=\"{url}\">GitHub</a>").is_ok());
        assert!(balanced("<B>mixed case</b>").is_ok());
    }

    #[test]
    fn test_unbalanced_markup() {
        assert_eq!(
            balanced("<b>open"),
            Err(MarkupError::Unclosed {
                tags: vec!["b".to_string()]
            })
        );
        assert_eq!(
            balanced("close</b>"),
            Err(MarkupError::UnexpectedClose {
                tag: "b".to_string()
            })
        );
        assert_eq!(
            balanced("<b><i>x</b></i>"),
            Err(MarkupError::Mismatched {
                expected: "i".to_string(),
                found: "b".to_string()
            })
        );
    }

    #[test]
    fn test_plain_text() {
        let markup = TrustedMarkup::new("优先从<b>文件元数据</b>读取。<br/>将图片拖放到此处。");
        assert_eq!(markup.to_plain_text(), "优先从文件元数据读取。\n将图片拖放到此处。");
        assert_eq!(
            TrustedMarkup::new("<a href=\"{url}\">{name}</a>").to_plain_text(),
            "{name}"
        );
    }
}

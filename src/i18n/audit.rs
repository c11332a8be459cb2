//! Conformance of a locale bundle against the reference locale
//!
//! Checks that a bundle has the same key paths as the reference, that no value
//! is empty, and that each value keeps the reference's interpolation points:
//! the same `{name}` placeholders and the same number of `{{...}}` plural
//! blocks. Markup is only allowed in keys declared with
//! [`Key::renders_markup`], and must be balanced there.

use std::collections::BTreeSet;

use crate::config::AuditConfig;

use super::markup::{MarkupError, check_balanced};
use super::tokens::{Token, TokenError, has_markup, placeholder_names, plural_count, scan};
use super::{Bundle, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// Present in the reference, absent here
    MissingKey,
    /// Present here, absent from the reference
    UnknownKey,
    EmptyValue,
    /// Same text as the reference
    Untranslated,
    PlaceholderMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
    PluralMismatch {
        expected: usize,
        found: usize,
    },
    /// Markup in a key the renderer escapes
    UntrustedMarkup,
    UnbalancedMarkup(MarkupError),
    Malformed(TokenError),
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::MissingKey => write!(f, "missing key"),
            FindingKind::UnknownKey => write!(f, "key not in reference"),
            FindingKind::EmptyValue => write!(f, "empty value"),
            FindingKind::Untranslated => write!(f, "identical to reference"),
            FindingKind::PlaceholderMismatch {
                missing,
                unexpected,
            } => {
                write!(f, "placeholder mismatch")?;
                if !missing.is_empty() {
                    write!(f, ", missing {{{}}}", missing.join("}, {"))?;
                }
                if !unexpected.is_empty() {
                    write!(f, ", unexpected {{{}}}", unexpected.join("}, {"))?;
                }
                Ok(())
            }
            FindingKind::PluralMismatch { expected, found } => write!(
                f,
                "expected {} plural block(s), found {}",
                expected, found
            ),
            FindingKind::UntrustedMarkup => write!(f, "markup in a key rendered as text"),
            FindingKind::UnbalancedMarkup(e) => write!(f, "unbalanced markup: {}", e),
            FindingKind::Malformed(e) => write!(f, "malformed value: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub path: String,
    pub severity: Severity,
    pub kind: FindingKind,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Result of auditing one bundle
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub locale: String,
    pub findings: Vec<Finding>,
    /// Reference keys checked
    pub total: usize,
    /// Keys present, non-empty and not identical to the reference
    pub translated: usize,
}

impl AuditReport {
    fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            ..Default::default()
        }
    }

    fn push(&mut self, path: &str, severity: Severity, kind: FindingKind) {
        self.findings.push(Finding {
            path: path.to_string(),
            severity,
            kind,
        });
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    /// No errors; warnings are allowed
    pub fn is_clean(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Translated share of the reference keys, 0.0 to 1.0
    pub fn coverage(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        self.translated as f32 / self.total as f32
    }

    pub fn findings_for(&self, path: &str) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.path == path)
    }
}

impl std::fmt::Display for AuditReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} error(s), {} warning(s), {}/{} translated ({:.1}%)",
            self.locale,
            self.errors().count(),
            self.warnings().count(),
            self.translated,
            self.total,
            self.coverage() * 100.0
        )
    }
}

/// Audit `candidate` against `reference`
pub fn audit(reference: &Bundle, candidate: &Bundle, config: &AuditConfig) -> AuditReport {
    let mut report = AuditReport::new(candidate.locale());
    let same_locale = reference.locale() == candidate.locale();

    for (path, expected) in reference.iter() {
        report.total += 1;

        let Some(value) = candidate.get(path) else {
            report.push(path, Severity::Error, FindingKind::MissingKey);
            continue;
        };
        if value.trim().is_empty() {
            report.push(path, Severity::Error, FindingKind::EmptyValue);
            continue;
        }

        let identical = !same_locale && value == expected && !config.allows_untranslated(path);
        if identical {
            if config.report_untranslated {
                report.push(path, Severity::Warning, FindingKind::Untranslated);
            }
        } else {
            report.translated += 1;
        }

        let Some(tokens) = check_value(path, value, &mut report) else {
            continue;
        };
        // A malformed reference value is reported by `audit_schema`
        if let Ok(expected_tokens) = scan(expected) {
            compare_interpolation(path, &expected_tokens, &tokens, &mut report);
        }
    }

    let unknown_severity = if config.fail_on_unknown_keys {
        Severity::Error
    } else {
        Severity::Warning
    };
    for path in candidate.paths() {
        if reference.get(path).is_none() {
            report.push(path, unknown_severity, FindingKind::UnknownKey);
        }
    }

    tracing::info!("Audited {} against {}: {}", candidate.locale(), reference.locale(), report);
    report
}

/// Audit a bundle against the compiled-in key schema
pub fn audit_schema(bundle: &Bundle) -> AuditReport {
    let mut report = AuditReport::new(bundle.locale());

    for key in Key::ALL {
        let path = key.path();
        report.total += 1;
        match bundle.get(&path) {
            None => report.push(&path, Severity::Error, FindingKind::MissingKey),
            Some(value) if value.trim().is_empty() => {
                report.push(&path, Severity::Error, FindingKind::EmptyValue)
            }
            Some(value) => {
                report.translated += 1;
                check_value(&path, value, &mut report);
            }
        }
    }

    for path in bundle.paths() {
        if Key::from_path(path).is_none() {
            report.push(path, Severity::Error, FindingKind::UnknownKey);
        }
    }

    tracing::debug!("Schema audit of {}: {}", bundle.locale(), report);
    report
}

/// Scan a value and check its markup. Returns the tokens when the value is
/// well-formed.
fn check_value<'a>(path: &str, value: &'a str, report: &mut AuditReport) -> Option<Vec<Token<'a>>> {
    let tokens = match scan(value) {
        Ok(tokens) => tokens,
        Err(e) => {
            report.push(path, Severity::Error, FindingKind::Malformed(e));
            return None;
        }
    };

    if has_markup(&tokens) {
        let trusted = Key::from_path(path).is_some_and(|k| k.renders_markup());
        if !trusted {
            report.push(path, Severity::Error, FindingKind::UntrustedMarkup);
        }
        if let Err(e) = check_balanced(&tokens) {
            report.push(path, Severity::Error, FindingKind::UnbalancedMarkup(e));
        }
    }

    Some(tokens)
}

fn compare_interpolation(
    path: &str,
    expected: &[Token<'_>],
    found: &[Token<'_>],
    report: &mut AuditReport,
) {
    let expected_names = placeholder_names(expected);
    let found_names = placeholder_names(found);
    if expected_names != found_names {
        let missing = difference(&expected_names, &found_names);
        let unexpected = difference(&found_names, &expected_names);
        report.push(
            path,
            Severity::Error,
            FindingKind::PlaceholderMismatch {
                missing,
                unexpected,
            },
        );
    }

    let expected_plurals = plural_count(expected);
    let found_plurals = plural_count(found);
    if expected_plurals != found_plurals {
        report.push(
            path,
            Severity::Error,
            FindingKind::PluralMismatch {
                expected: expected_plurals,
                found: found_plurals,
            },
        );
    }
}

fn difference(a: &BTreeSet<&str>, b: &BTreeSet<&str>) -> Vec<String> {
    a.difference(b).map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn reference() -> Bundle {
        Bundle::builtin(Language::English)
    }

    fn zh() -> Bundle {
        Bundle::builtin(Language::ChineseSimplified)
    }

    fn kinds(report: &AuditReport, path: &str) -> Vec<FindingKind> {
        report.findings_for(path).map(|f| f.kind.clone()).collect()
    }

    #[test]
    fn test_builtin_bundles_match_schema() {
        for lang in Language::all() {
            let report = audit_schema(&Bundle::builtin(*lang));
            assert!(report.is_clean(), "{:?}", report.findings);
            assert_eq!(report.total, Key::ALL.len());
        }
    }

    #[test]
    fn test_builtin_chinese_conforms_to_reference() {
        let report = audit(&reference(), &zh(), &AuditConfig::default());
        assert!(report.is_clean(), "{:?}", report.findings);
        assert_eq!(report.warnings().count(), 0, "{:?}", report.findings);
        assert_eq!(report.total, Key::ALL.len());
        assert!(report.coverage() > 0.99);
    }

    #[test]
    fn test_reference_against_itself_is_clean() {
        let report = audit(&reference(), &reference(), &AuditConfig::default());
        assert!(report.findings.is_empty());
        assert_eq!(report.translated, report.total);
    }

    #[test]
    fn test_folder_keeps_one_plural_block() {
        let value = zh().get("settings.folder").map(str::to_string).unwrap();
        assert_eq!(plural_count(&scan(&value).unwrap()), 1);
    }

    #[test]
    fn test_artwork_tooltip_is_balanced_markup() {
        let value = zh()
            .get("trackInfo.artworkTooltipBody")
            .map(str::to_string)
            .unwrap();
        let tokens = scan(&value).unwrap();
        assert!(has_markup(&tokens));
        assert!(check_balanced(&tokens).is_ok());
    }

    #[test]
    fn test_missing_empty_and_unknown_keys() {
        let mut candidate = zh();
        candidate.remove("sidebar.library");
        candidate.insert("sidebar.albums", "  ");
        candidate.insert("sidebar.podcasts", "播客");

        let report = audit(&reference(), &candidate, &AuditConfig::default());
        assert_eq!(kinds(&report, "sidebar.library"), vec![FindingKind::MissingKey]);
        assert_eq!(kinds(&report, "sidebar.albums"), vec![FindingKind::EmptyValue]);
        assert_eq!(kinds(&report, "sidebar.podcasts"), vec![FindingKind::UnknownKey]);
        assert_eq!(report.errors().count(), 2);
        assert_eq!(report.warnings().count(), 1);

        let strict = AuditConfig {
            fail_on_unknown_keys: true,
            ..AuditConfig::default()
        };
        let report = audit(&reference(), &candidate, &strict);
        assert_eq!(report.errors().count(), 3);
    }

    #[test]
    fn test_placeholder_mismatch() {
        let mut candidate = zh();
        candidate.insert("sidebar.searchResults", "“{query}”的搜索结果");

        let report = audit(&reference(), &candidate, &AuditConfig::default());
        assert_eq!(
            kinds(&report, "sidebar.searchResults"),
            vec![FindingKind::PlaceholderMismatch {
                missing: vec!["text".to_string()],
                unexpected: vec!["query".to_string()],
            }]
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn test_placeholder_dropped_inside_plural_form() {
        let mut reference = reference();
        reference.insert("albums.byArtist", "{{1 track by {artist} | ?? tracks by {artist}}}");
        let mut candidate = zh();
        candidate.insert("albums.byArtist", "{{1 首曲目 | ?? 首曲目}}");

        let report = audit(&reference, &candidate, &AuditConfig::default());
        assert_eq!(
            kinds(&report, "albums.byArtist"),
            vec![FindingKind::PlaceholderMismatch {
                missing: vec!["artist".to_string()],
                unexpected: vec![],
            }]
        );

        candidate.insert("albums.byArtist", "{{{artist} 的 1 首曲目 | {artist} 的 ?? 首曲目}}");
        let report = audit(&reference, &candidate, &AuditConfig::default());
        assert!(kinds(&report, "albums.byArtist").is_empty());
    }

    #[test]
    fn test_plural_mismatch() {
        let mut candidate = zh();
        candidate.insert("settings.folder", "文件夹");

        let report = audit(&reference(), &candidate, &AuditConfig::default());
        assert_eq!(
            kinds(&report, "settings.folder"),
            vec![FindingKind::PluralMismatch {
                expected: 1,
                found: 0
            }]
        );
    }

    #[test]
    fn test_markup_checks() {
        let mut candidate = zh();
        candidate.insert("trackInfo.artworkTooltipBody", "优先从<b>文件元数据读取封面");
        candidate.insert("sidebar.lyrics", "<i>歌词</i>");

        let report = audit(&reference(), &candidate, &AuditConfig::default());
        assert_eq!(
            kinds(&report, "trackInfo.artworkTooltipBody"),
            vec![FindingKind::UnbalancedMarkup(MarkupError::Unclosed {
                tags: vec!["b".to_string()]
            })]
        );
        assert_eq!(kinds(&report, "sidebar.lyrics"), vec![FindingKind::UntrustedMarkup]);
    }

    #[test]
    fn test_malformed_value() {
        let mut candidate = zh();
        candidate.insert("player.streamingTo", "正在串流到 {device");

        let report = audit(&reference(), &candidate, &AuditConfig::default());
        assert_eq!(
            kinds(&report, "player.streamingTo"),
            vec![FindingKind::Malformed(TokenError::UnterminatedPlaceholder {
                offset: 16
            })]
        );
    }

    #[test]
    fn test_untranslated_warning_and_allowlist() {
        let mut candidate = zh();
        candidate.insert("player.play", "Play");

        let report = audit(&reference(), &candidate, &AuditConfig::default());
        assert_eq!(kinds(&report, "player.play"), vec![FindingKind::Untranslated]);
        assert!(report.is_clean());
        assert_eq!(report.translated, report.total - 1);

        let quiet = AuditConfig {
            report_untranslated: false,
            ..AuditConfig::default()
        };
        let report = audit(&reference(), &candidate, &quiet);
        assert!(report.findings.is_empty());

        // `settings.lastFm` is allow-listed by default
        assert!(kinds(&report, "settings.lastFm").is_empty());
    }

    #[test]
    fn test_schema_audit_flags_unknown_paths() {
        let mut bundle = zh();
        bundle.insert("sidebar.podcasts", "播客");
        bundle.remove("toasts.copied");

        let report = audit_schema(&bundle);
        assert_eq!(kinds(&report, "sidebar.podcasts"), vec![FindingKind::UnknownKey]);
        assert_eq!(kinds(&report, "toasts.copied"), vec![FindingKind::MissingKey]);
        assert_eq!(report.errors().count(), 2);
    }

    #[test]
    fn test_report_summary() {
        let mut candidate = zh();
        candidate.remove("sidebar.library");
        let report = audit(&reference(), &candidate, &AuditConfig::default());
        let summary = report.to_string();
        assert!(summary.starts_with("zh-cn: 1 error(s), 0 warning(s)"), "{}", summary);
    }
}

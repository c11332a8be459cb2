//! Locale bundles flattened to key paths
//!
//! The frontend loads a bundle as a nested object (`section -> field -> text`).
//! Here it is kept flat, keyed by dotted path, so two bundles can be compared
//! key by key. Bundles come either from the built-in tables or from a JSON file
//! written by translators.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Map, Value};

use super::{Key, Language, text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    /// Locale tag, e.g. `zh-cn`
    locale: String,
    entries: BTreeMap<String, String>,
}

impl Bundle {
    /// An empty bundle for the given locale tag
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: BTreeMap::new(),
        }
    }

    /// The compiled-in translations for a language
    pub fn builtin(lang: Language) -> Self {
        let mut bundle = Self::new(lang.code());
        for key in Key::ALL {
            if let Some(value) = text(lang, *key) {
                bundle.insert(key.path(), value);
            }
        }
        bundle
    }

    /// Parse a nested JSON bundle. Every leaf must be a string.
    pub fn from_json_str(locale: impl Into<String>, json: &str) -> Result<Self, BundleError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| BundleError::Parse(e.to_string()))?;
        let Value::Object(root) = value else {
            return Err(BundleError::Shape {
                path: String::new(),
                found: json_kind(&value),
            });
        };

        let mut bundle = Self::new(locale);
        flatten(&root, "", &mut bundle.entries)?;
        Ok(bundle)
    }

    /// Load a bundle from a JSON file; the locale tag is the file stem
    /// (`zh-cn.json` -> `zh-cn`).
    pub fn from_file(path: &Path) -> Result<Self, BundleError> {
        let locale = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let content = std::fs::read_to_string(path).map_err(|e| BundleError::Io(e.to_string()))?;
        let bundle = Self::from_json_str(locale, &content)?;
        tracing::debug!(
            "Loaded bundle {} from {:?} ({} keys)",
            bundle.locale,
            path,
            bundle.len()
        );
        Ok(bundle)
    }

    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(path.into(), value.into());
    }

    pub fn remove(&mut self, path: &str) -> Option<String> {
        self.entries.remove(path)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Key paths in sorted order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nested JSON object in the shape the frontend loads.
    ///
    /// Fails when one path is both a value and a section, e.g. `sidebar` and
    /// `sidebar.library`.
    pub fn to_json(&self) -> Result<Value, BundleError> {
        let mut root = Map::new();
        for (path, value) in &self.entries {
            let mut node = &mut root;
            let mut segments = path.split('.').peekable();
            while let Some(segment) = segments.next() {
                if segments.peek().is_none() {
                    if node.contains_key(segment) {
                        return Err(BundleError::Conflict { path: path.clone() });
                    }
                    node.insert(segment.to_string(), Value::String(value.clone()));
                    break;
                }
                let child = node
                    .entry(segment.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                let Value::Object(child) = child else {
                    return Err(BundleError::Conflict { path: path.clone() });
                };
                node = child;
            }
        }
        Ok(Value::Object(root))
    }

    pub fn to_json_string(&self) -> Result<String, BundleError> {
        serde_json::to_string_pretty(&self.to_json()?).map_err(|e| BundleError::Parse(e.to_string()))
    }

    /// Write the nested JSON bundle, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<(), BundleError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BundleError::Io(e.to_string()))?;
        }
        let content = self.to_json_string()?;
        std::fs::write(path, content).map_err(|e| BundleError::Io(e.to_string()))?;
        tracing::info!("Wrote {} bundle to {:?}", self.locale, path);
        Ok(())
    }
}

fn flatten(
    object: &Map<String, Value>,
    prefix: &str,
    out: &mut BTreeMap<String, String>,
) -> Result<(), BundleError> {
    for (name, value) in object {
        // Field names become path segments
        if name.is_empty() || name.contains('.') {
            return Err(BundleError::InvalidField {
                section: prefix.to_string(),
                name: name.clone(),
            });
        }
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        match value {
            Value::String(s) => {
                out.insert(path, s.clone());
            }
            Value::Object(child) => flatten(child, &path, out)?,
            other => {
                return Err(BundleError::Shape {
                    path,
                    found: json_kind(other),
                });
            }
        }
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Errors that can occur loading or writing bundles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleError {
    Io(String),
    Parse(String),
    /// A node that is neither a section nor a string leaf
    Shape { path: String, found: &'static str },
    /// A field name that cannot be a path segment (empty or containing `.`)
    InvalidField { section: String, name: String },
    /// A path holding a value that is also a section
    Conflict { path: String },
}

impl std::fmt::Display for BundleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleError::Io(e) => write!(f, "IO error: {}", e),
            BundleError::Parse(e) => write!(f, "Parse error: {}", e),
            BundleError::Shape { path, found } if path.is_empty() => {
                write!(f, "Bundle root must be an object, found {}", found)
            }
            BundleError::Shape { path, found } => {
                write!(f, "Expected a string or section at {}, found {}", path, found)
            }
            BundleError::InvalidField { section, name } if section.is_empty() => {
                write!(f, "Invalid section name {:?}", name)
            }
            BundleError::InvalidField { section, name } => {
                write!(f, "Invalid field name {:?} in {}", name, section)
            }
            BundleError::Conflict { path } => {
                write!(f, "{} is both a value and a section", path)
            }
        }
    }
}

impl std::error::Error for BundleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bundle_has_every_key() {
        let bundle = Bundle::builtin(Language::ChineseSimplified);
        assert_eq!(bundle.locale(), "zh-cn");
        assert_eq!(bundle.len(), Key::ALL.len());
        assert_eq!(
            bundle.get("settings.folder"),
            Some("{{1 个文件夹 | ?? 个文件夹}}")
        );
    }

    #[test]
    fn test_from_json_flattens_sections() {
        let json = r#"{
            "sidebar": { "library": "音乐库", "albums": "专辑" },
            "settings": { "aiModel": "AI 模型" }
        }"#;
        let bundle = Bundle::from_json_str("zh-cn", json).unwrap();
        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle.get("sidebar.library"), Some("音乐库"));
        assert_eq!(bundle.get("settings.aiModel"), Some("AI 模型"));
        let paths: Vec<&str> = bundle.paths().collect();
        assert_eq!(paths, vec!["settings.aiModel", "sidebar.albums", "sidebar.library"]);
    }

    #[test]
    fn test_from_json_rejects_non_string_leaves() {
        let err = Bundle::from_json_str("zh-cn", r#"{ "sidebar": { "library": 3 } }"#).unwrap_err();
        assert_eq!(
            err,
            BundleError::Shape {
                path: "sidebar.library".to_string(),
                found: "number"
            }
        );

        let err = Bundle::from_json_str("zh-cn", "[]").unwrap_err();
        assert!(matches!(err, BundleError::Shape { found: "array", .. }));

        let err = Bundle::from_json_str("zh-cn", "{").unwrap_err();
        assert!(matches!(err, BundleError::Parse(_)));
    }

    #[test]
    fn test_to_json_nests_by_section() {
        let bundle = Bundle::builtin(Language::English);
        let json = bundle.to_json().unwrap();
        assert_eq!(json["sidebar"]["library"], "Library");
        assert_eq!(json["trackInfo"]["artworkTooltipTitle"], "Where does the artwork come from?");

        let reparsed = Bundle::from_json_str("en", &bundle.to_json_string().unwrap()).unwrap();
        assert_eq!(reparsed, bundle);
    }

    #[test]
    fn test_from_json_rejects_dotted_field_names() {
        let err = Bundle::from_json_str("zh-cn", r#"{ "settings": { "a.b": "值" } }"#).unwrap_err();
        assert_eq!(
            err,
            BundleError::InvalidField {
                section: "settings".to_string(),
                name: "a.b".to_string()
            }
        );

        let err = Bundle::from_json_str("zh-cn", r#"{ "": { "library": "音乐库" } }"#).unwrap_err();
        assert!(matches!(err, BundleError::InvalidField { .. }));
    }

    #[test]
    fn test_export_rejects_value_that_is_also_a_section() {
        let mut bundle = Bundle::new("zh-cn");
        bundle.insert("sidebar", "侧边栏");
        bundle.insert("sidebar.library", "音乐库");
        assert_eq!(
            bundle.to_json().unwrap_err(),
            BundleError::Conflict {
                path: "sidebar.library".to_string()
            }
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zh-cn.json");
        assert!(bundle.save_to_file(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locales").join("zh-CN.json");
        let bundle = Bundle::builtin(Language::ChineseSimplified);
        bundle.save_to_file(&path).unwrap();

        let loaded = Bundle::from_file(&path).unwrap();
        assert_eq!(loaded.locale(), "zh-cn");
        assert_eq!(loaded, bundle);

        let missing = Bundle::from_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, BundleError::Io(_)));
    }
}

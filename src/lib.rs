//! Musicat locale bundles
//!
//! Compiled-in English (reference) and Simplified Chinese translations for the
//! Musicat frontend, plus the schema audit that keeps translator bundles in
//! step with the reference locale.

pub mod config;
pub mod i18n;

pub use config::{AuditConfig, ConfigError};
pub use i18n::{AuditReport, Bundle, Key, Language, Section};

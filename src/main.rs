//! musicat-i18n - audit and export Musicat locale bundles

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use musicat_i18n::i18n::{self, Severity};
use musicat_i18n::{AuditConfig, Bundle, Key, Language, Section};

#[derive(Parser)]
#[command(
    name = "musicat-i18n",
    version,
    about = "Audit and export Musicat locale bundles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a bundle against the reference locale.
    Audit {
        /// Built-in locale to audit (ignored when --file is given).
        #[arg(short, long, default_value = "zh-cn")]
        locale: String,
        /// Translator bundle (nested JSON) to audit instead of a built-in one.
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Audit config file; defaults to the user config directory.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write a built-in bundle as nested JSON.
    Export {
        locale: String,
        /// Output file; prints to stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List key paths with their reference text.
    Keys {
        /// Only keys in this section, e.g. `settings`.
        #[arg(short, long)]
        section: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Audit {
            locale,
            file,
            config,
        } => run_audit(&locale, file, config),
        Commands::Export { locale, out } => run_export(&locale, out),
        Commands::Keys { section } => run_keys(section.as_deref()),
    }
}

fn parse_language(code: &str) -> anyhow::Result<Language> {
    Language::from_code(code).with_context(|| {
        let known: Vec<&str> = Language::all().iter().map(|l| l.code()).collect();
        format!("unknown locale '{}' (known: {})", code, known.join(", "))
    })
}

fn run_audit(
    locale: &str,
    file: Option<PathBuf>,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => AuditConfig::load_from_file(&path)
            .with_context(|| format!("failed to load audit config {:?}", path))?,
        None => AuditConfig::load(),
    };

    let reference = Bundle::builtin(config.reference);
    let schema_report = i18n::audit_schema(&reference);
    if !schema_report.is_clean() {
        for finding in schema_report.errors() {
            tracing::error!("reference {}", finding);
        }
        anyhow::bail!("reference locale {} does not match the key schema", config.reference);
    }

    let candidate = match file {
        Some(path) => Bundle::from_file(&path)
            .with_context(|| format!("failed to load bundle {:?}", path))?,
        None => Bundle::builtin(parse_language(locale)?),
    };

    let report = i18n::audit(&reference, &candidate, &config);
    for finding in &report.findings {
        match finding.severity {
            Severity::Error => tracing::error!("{}", finding),
            Severity::Warning => tracing::warn!("{}", finding),
        }
    }
    println!("{}", report);

    if !report.is_clean() {
        anyhow::bail!("{} failed the audit", report.locale);
    }
    Ok(())
}

fn run_export(locale: &str, out: Option<PathBuf>) -> anyhow::Result<()> {
    let bundle = Bundle::builtin(parse_language(locale)?);
    match out {
        Some(path) => bundle
            .save_to_file(&path)
            .with_context(|| format!("failed to write {:?}", path))?,
        None => println!("{}", bundle.to_json_string()?),
    }
    Ok(())
}

fn run_keys(section: Option<&str>) -> anyhow::Result<()> {
    let keys: Vec<Key> = match section {
        Some(name) => {
            let section = Section::from_name(name)
                .with_context(|| format!("unknown section '{}'", name))?;
            section.keys().collect()
        }
        None => Key::ALL.to_vec(),
    };

    for key in keys {
        let marker = if key.renders_markup() { " [markup]" } else { "" };
        let reference = i18n::text(Language::English, key).unwrap_or_default();
        println!("{}{}\t{}", key.path(), marker, reference);
    }
    Ok(())
}

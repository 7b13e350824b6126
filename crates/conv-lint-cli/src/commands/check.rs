//! Check command implementation.

use anyhow::{bail, Context, Result};
use conv_lint_core::{Analyzer, Config, RuleBox, Severity};
use conv_lint_rules::{
    NoEmptyAddChain, PascalCasePublicProperty, Preset, UnderscorePrivateField,
};
use std::path::Path;

use super::output;
use crate::OutputFormat;

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["conv-lint.toml", ".conv-lint.toml"];

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(path, config_path)?;
    let fail_on = resolve_fail_on(&config)?;

    // Add rules based on filter
    let rules_to_add = if let Some(filter) = rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names)
    } else {
        resolve_preset(&config)?.rules()
    };

    let mut builder = Analyzer::builder().root(path).config(config);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    output::print(&result, format)?;

    if result.has_findings_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads the configuration from an explicit path or the root's candidates.
fn load_config(root: &Path, explicit_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit_path {
        return Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()));
    }

    for candidate in CONFIG_CANDIDATES {
        let path = root.join(candidate);
        if path.exists() {
            tracing::debug!("Using config: {}", path.display());
            return Config::from_file(&path)
                .with_context(|| format!("Failed to load config: {}", path.display()));
        }
    }

    Ok(Config::default())
}

/// Resolves the effective preset from the config (default: recommended).
fn resolve_preset(config: &Config) -> Result<Preset> {
    match config.preset.as_deref().unwrap_or("recommended") {
        "recommended" => Ok(Preset::Recommended),
        "naming" => Ok(Preset::Naming),
        "creation" => Ok(Preset::Creation),
        other => bail!("unknown preset `{other}`. Valid presets: recommended, naming, creation"),
    }
}

/// Resolves the `fail_on` severity from the config (default: error).
fn resolve_fail_on(config: &Config) -> Result<Severity> {
    match config.fail_on.as_deref().unwrap_or("error") {
        "error" => Ok(Severity::Error),
        "warning" => Ok(Severity::Warning),
        "info" => Ok(Severity::Info),
        "hidden" => Ok(Severity::Hidden),
        other => bail!("unknown severity `{other}`. Valid values: error, warning, info, hidden"),
    }
}

fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        match *name {
            "pascal-case-public-property" | "NMCVPUBP" => {
                rules.push(Box::new(PascalCasePublicProperty::new()));
            }
            "underscore-private-field" | "NMCVPRVM" => {
                rules.push(Box::new(UnderscorePrivateField::new()));
            }
            "no-empty-add-chain" | "BadWayImmutableArray" => {
                rules.push(Box::new(NoEmptyAddChain::new()));
            }
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}

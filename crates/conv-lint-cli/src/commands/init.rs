//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# conv-lint configuration
# See https://github.com/example/conv-lint for documentation

# Preset to run when no --rules filter is given: recommended, naming, creation
# preset = "recommended"

# Severity threshold for a failing exit code: error, warning, info, hidden
fail_on = "error"

[analyzer]
# Root directory to search for tree files (default: current directory)
# root = "./trees"

# Glob patterns to exclude from tree-file discovery
exclude = [
    "**/target/**",
]

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.pascal-case-public-property]
enabled = true
# severity = "warning"  # Override default severity

[rules.underscore-private-field]
enabled = true

# [rules.no-empty-add-chain]
# enabled = true
# severity = "error"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("conv-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created conv-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit conv-lint.toml to configure rules");
    println!("  2. Run: conv-lint check");

    Ok(())
}

//! List rules command implementation.

use conv_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<22} {:<30} Description", "Code", "Name");
    println!("{}", "-".repeat(90));

    for rule in all_rules() {
        println!(
            "{:<22} {:<30} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - all rules (default)");
    println!("  naming       - NMCVPUBP, NMCVPRVM");
    println!("  creation     - BadWayImmutableArray");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  conv-lint check --rules pascal-case-public-property,no-empty-add-chain");
    println!("  conv-lint check --rules NMCVPUBP,NMCVPRVM");
}

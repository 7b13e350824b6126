//! # conv-lint-rules
//!
//! Built-in convention rules for conv-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | NMCVPUBP | `pascal-case-public-property` | Public property symbols should be in PascalCase |
//! | NMCVPRVM | `underscore-private-field` | Private member symbols should be prefixed with `_` |
//! | BadWayImmutableArray | `no-empty-add-chain` | Forbids building an immutable array from `Empty.Add` chains |
//!
//! ## Usage
//!
//! ```ignore
//! use conv_lint_core::Engine;
//! use conv_lint_rules::{NoEmptyAddChain, PascalCasePublicProperty};
//!
//! let engine = Engine::builder()
//!     .rule(PascalCasePublicProperty::new())
//!     .rule(NoEmptyAddChain::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod immutable_array_creation;
mod presets;
mod private_member_naming;
mod public_property_naming;

pub use immutable_array_creation::NoEmptyAddChain;
pub use presets::{all_rules, creation_rules, naming_rules, recommended_rules, Preset};
pub use private_member_naming::UnderscorePrivateField;
pub use public_property_naming::PascalCasePublicProperty;

/// Re-export core types for convenience.
pub use conv_lint_core::{Finding, Rule, Severity};

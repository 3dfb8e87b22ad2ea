//! rigsmith-core
//!
//! Core library for checking, scoring, and improving PC builds.
//!
//! This crate defines the component model, the compatibility rule engine,
//! the scoring engine, and the upgrade/auto-fix planner. Everything here is
//! synchronous and free of IO apart from the workspace helpers, so it can be
//! driven from the CLI or embedded elsewhere.

pub mod catalog;
pub mod compat;
pub mod model;
pub mod planner;
pub mod power;
pub mod registry;
pub mod scoring;
pub mod workspace;

pub use catalog::{Catalog, CatalogError};
pub use compat::{check_compatibility, CompatOptions};
pub use planner::{generate_auto_fix_plan, generate_upgrade_path, AutoFixStrategy, Planner};
pub use scoring::{calculate_scores, ScoreOptions, ScoreResult};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

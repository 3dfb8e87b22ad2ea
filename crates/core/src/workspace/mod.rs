//! On-disk workspace: a `.rigsmith/` metadata directory holding the config,
//! plus `builds/` and `reports/` next to it.
//!
//! The core only computes paths and reads files. Creating the layout is left
//! to frontends.

mod config;
mod context;
mod layout;
mod util;

pub use config::RigConfig;
pub use context::WorkspaceContext;
pub use layout::WorkspaceLayout;
pub use util::{load_build, load_catalog, load_config, load_registry};
pub(crate) use util::is_json_path;

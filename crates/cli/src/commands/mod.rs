pub mod autofix;
pub mod check;
pub mod presets;
pub mod project;
pub mod report;
pub mod score;
pub mod upgrade;
pub mod util;

pub use autofix::*;
pub use check::*;
pub use presets::*;
pub use project::*;
pub use report::*;
pub use score::*;
pub use upgrade::*;
pub use util::*;

mod classify;
mod requirements;
mod resolve;
mod types;

pub use classify::{classify, classify_major, MARGINAL_WINDOW};
pub use requirements::{RequirementRule, RequirementTable, DEFAULT_REQUIRED_MAJOR};
pub use resolve::{required_major_for, resolve};
pub use types::{RankedInstallation, Resolution};

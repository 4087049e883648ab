mod installation;
mod kind;
mod tier;
mod version;

pub use installation::Installation;
pub use kind::InstallationKind;
pub use tier::CompatibilityTier;
pub use version::{display_name, leading_major, parse_version_output, version_from_dir_name};

#[cfg(test)]
mod tests;

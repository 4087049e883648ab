use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::kind::InstallationKind;
use crate::version::{display_name, leading_major};

/// One discovered Java runtime, as reported by the discovery service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Installation {
    pub path: String,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: InstallationKind,
    #[serde(default)]
    pub source: String,
}

impl Installation {
    pub fn new(
        path: impl Into<String>,
        version: impl Into<String>,
        kind: InstallationKind,
        source: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            kind,
            source: source.into(),
        }
    }

    /// Leading integer of the version string; unparseable versions count as 0.
    pub fn major(&self) -> u32 {
        leading_major(&self.version).unwrap_or(0)
    }

    pub fn display_name(&self) -> String {
        display_name(&self.version)
    }

    pub fn executable_path(&self) -> PathBuf {
        let binary = if cfg!(windows) { "java.exe" } else { "java" };
        PathBuf::from(&self.path).join("bin").join(binary)
    }
}

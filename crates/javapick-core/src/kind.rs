use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InstallationKind {
    #[serde(rename = "JDK")]
    FullDevelopmentKit,
    #[serde(rename = "JRE")]
    RuntimeOnly,
    #[serde(rename = "System")]
    SystemDefault,
}

impl InstallationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullDevelopmentKit => "JDK",
            Self::RuntimeOnly => "JRE",
            Self::SystemDefault => "System",
        }
    }

    /// Higher ranks are preferred when two installations share a major version.
    pub fn preference(self) -> u8 {
        match self {
            Self::FullDevelopmentKit => 2,
            Self::RuntimeOnly => 1,
            Self::SystemDefault => 0,
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "jdk" => Some(Self::FullDevelopmentKit),
            "jre" => Some(Self::RuntimeOnly),
            "system" => Some(Self::SystemDefault),
            _ => None,
        }
    }

    pub fn from_dir_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.starts_with("jdk") {
            return Some(Self::FullDevelopmentKit);
        }
        if lower.starts_with("jre") {
            return Some(Self::RuntimeOnly);
        }

        None
    }
}

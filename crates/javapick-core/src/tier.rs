use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityTier {
    Incompatible,
    #[serde(rename = "marginal")]
    MarginallyCompatible,
    Compatible,
}

impl CompatibilityTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compatible => "compatible",
            Self::MarginallyCompatible => "marginal",
            Self::Incompatible => "incompatible",
        }
    }

    pub fn is_usable(self) -> bool {
        self != Self::Incompatible
    }
}

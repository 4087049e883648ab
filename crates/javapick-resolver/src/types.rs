use javapick_core::{CompatibilityTier, Installation};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedInstallation {
    pub installation: Installation,
    pub tier: CompatibilityTier,
    pub major: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub required_major: u32,
    pub ranked: Vec<RankedInstallation>,
    pub best: Option<Installation>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn best_tier(&self) -> Option<CompatibilityTier> {
        self.ranked.first().map(|entry| entry.tier)
    }
}

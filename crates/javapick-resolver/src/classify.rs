use javapick_core::{CompatibilityTier, Installation};

/// How far below the required major an installation may sit and still be
/// offered with a warning instead of being rejected.
pub const MARGINAL_WINDOW: u32 = 4;

pub fn classify(installation: &Installation, required_major: u32) -> CompatibilityTier {
    classify_major(installation.major(), required_major)
}

pub fn classify_major(major: u32, required_major: u32) -> CompatibilityTier {
    if major >= required_major {
        CompatibilityTier::Compatible
    } else if major >= required_major.saturating_sub(MARGINAL_WINDOW) {
        CompatibilityTier::MarginallyCompatible
    } else {
        CompatibilityTier::Incompatible
    }
}

use std::cmp::Reverse;

use javapick_core::Installation;
use tracing::debug;

use crate::classify::classify_major;
use crate::types::{RankedInstallation, Resolution};

/// Ranks `installations` best-first against `required_major`.
///
/// Ordering is by major version, then kind preference, then discovery order.
/// The top entry becomes `best` whatever its tier; callers decide whether an
/// incompatible pick deserves a warning.
pub fn resolve(installations: &[Installation], required_major: u32) -> Resolution {
    let mut indexed: Vec<(usize, u32, &Installation)> = installations
        .iter()
        .enumerate()
        .map(|(index, installation)| (index, installation.major(), installation))
        .collect();

    indexed.sort_by_key(|(index, major, installation)| {
        (
            Reverse(*major),
            Reverse(installation.kind.preference()),
            *index,
        )
    });

    let ranked: Vec<RankedInstallation> = indexed
        .into_iter()
        .map(|(_, major, installation)| RankedInstallation {
            installation: installation.clone(),
            tier: classify_major(major, required_major),
            major,
        })
        .collect();
    let best = ranked.first().map(|entry| entry.installation.clone());

    debug!(
        candidates = ranked.len(),
        required_major,
        best = best.as_ref().map(|installation| installation.path.as_str()),
        "resolved java installations"
    );

    Resolution {
        required_major,
        ranked,
        best,
    }
}

/// Looks up the required major for `target_version` through `lookup`,
/// falling back to `default` when nothing matches.
pub fn required_major_for<F>(target_version: &str, lookup: F, default: u32) -> u32
where
    F: Fn(&str) -> Option<u32>,
{
    lookup(target_version).unwrap_or(default)
}

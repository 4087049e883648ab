use std::collections::HashSet;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::resolve::required_major_for;

/// Newest LTS line the built-in table knows about. Targets newer than any rule
/// land here.
pub const DEFAULT_REQUIRED_MAJOR: u32 = 21;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequirementRule {
    pub prefix: String,
    pub java: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequirementTable {
    #[serde(default = "default_required_major")]
    pub default: u32,
    #[serde(default)]
    pub rules: Vec<RequirementRule>,
}

fn default_required_major() -> u32 {
    DEFAULT_REQUIRED_MAJOR
}

impl Default for RequirementTable {
    fn default() -> Self {
        Self::minecraft()
    }
}

impl RequirementTable {
    pub fn new(default: u32) -> Self {
        Self {
            default,
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, prefix: impl Into<String>, java: u32) -> Self {
        self.rules.push(RequirementRule {
            prefix: prefix.into(),
            java,
        });
        self
    }

    /// Minecraft release lines and the Java major each one needs.
    pub fn minecraft() -> Self {
        let mut table = Self::new(DEFAULT_REQUIRED_MAJOR).with_rule("1.21", 21);
        for minor in 17..=20 {
            table = table.with_rule(format!("1.{minor}"), 17);
        }
        for minor in 0..=16 {
            table = table.with_rule(format!("1.{minor}"), 8);
        }
        table
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        let table: Self = toml::from_str(input).context("failed to parse requirement table")?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed reading requirement table: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid requirement table: {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.default == 0 {
            return Err(anyhow!("default java requirement must be greater than zero"));
        }

        let mut seen = HashSet::new();
        for rule in &self.rules {
            let prefix = rule.prefix.trim();
            if prefix.is_empty() {
                return Err(anyhow!("requirement prefix must not be empty"));
            }
            if prefix.split('.').any(str::is_empty) {
                return Err(anyhow!(
                    "requirement prefix contains an empty segment: {}",
                    rule.prefix
                ));
            }
            if rule.java == 0 {
                return Err(anyhow!(
                    "java requirement for prefix '{prefix}' must be greater than zero"
                ));
            }
            if !seen.insert(prefix) {
                return Err(anyhow!("duplicate requirement prefix '{prefix}'"));
            }
        }

        Ok(())
    }

    /// Finds the rule whose prefix covers the most leading segments of
    /// `target`. Ties keep the earlier rule.
    pub fn lookup(&self, target: &str) -> Option<u32> {
        let target = target.trim();
        if target.is_empty() {
            return None;
        }
        let target_segments: Vec<&str> = target.split('.').collect();

        let mut matched: Option<(usize, u32)> = None;
        for rule in &self.rules {
            let rule_segments: Vec<&str> = rule.prefix.trim().split('.').collect();
            if rule_segments.len() > target_segments.len() {
                continue;
            }
            if rule_segments
                .iter()
                .zip(&target_segments)
                .any(|(left, right)| left != right)
            {
                continue;
            }
            let longer = matched
                .map(|(len, _)| rule_segments.len() > len)
                .unwrap_or(true);
            if longer {
                matched = Some((rule_segments.len(), rule.java));
            }
        }

        matched.map(|(_, java)| java)
    }

    pub fn required_major_for(&self, target: &str) -> u32 {
        let required = required_major_for(target, |t| self.lookup(t), self.default);
        debug!(target_version = target, required, "looked up java requirement");
        required
    }
}

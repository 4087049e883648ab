//! Text helpers for Java version strings.
//!
//! Everything here is pure string handling. Discovery itself (walking install
//! directories, running `java -version`) happens outside this crate; these
//! helpers only interpret what discovery hands back.

/// Returns the leading integer of the first `.`-separated component.
///
/// `"21.0.1"` yields 21, `"9-ea"` yields 9, and `"abc"` or `""` yield `None`.
pub fn leading_major(version: &str) -> Option<u32> {
    let first = version.trim().split('.').next()?;
    let digits: String = first.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Label shown next to an installation, e.g. `Java 21`.
///
/// Pre-9 runtimes report themselves as `1.x`; those are labelled by the
/// second component. This only affects the label, never the classification.
pub fn display_name(version: &str) -> String {
    let trimmed = version.trim();
    let mut parts = trimmed.split('.');
    let first = parts.next().unwrap_or_default();

    if first == "1" {
        if let Some(legacy) = parts.next().and_then(leading_major) {
            return format!("Java {legacy}");
        }
    }

    match leading_major(trimmed) {
        Some(major) => format!("Java {major}"),
        None => format!("Java {trimmed}"),
    }
}

/// Extracts the version from the first line of `java -version` output.
///
/// The first line looks like `openjdk version "17.0.2" 2022-01-18`; the third
/// token is taken with its quotes stripped.
pub fn parse_version_output(output: &str) -> Option<String> {
    let first_line = output.lines().next()?;
    let token = first_line.split_whitespace().nth(2)?;
    let version = token.trim_matches('"');
    if version.is_empty() {
        return None;
    }
    Some(version.to_string())
}

/// Derives a version from an install directory name.
///
/// `jdk-21.0.1` and `jdk-17.0.2-hotspot` carry the version after the first
/// dash. Legacy `jre1.8.0_291` directories have no dash and use `_` before the
/// update number.
pub fn version_from_dir_name(name: &str) -> Option<String> {
    if let Some((_, rest)) = name.split_once('-') {
        let version = rest.split('-').next().unwrap_or(rest);
        if version.is_empty() {
            return None;
        }
        return Some(version.to_string());
    }

    let rest = name.strip_prefix("jre")?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.replace('_', "."))
}

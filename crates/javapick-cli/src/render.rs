use std::io::IsTerminal;

use anstyle::{AnsiColor, Effects, Style};
use javapick_core::CompatibilityTier;
use javapick_resolver::Resolution;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OutputStyle {
    Plain,
    Rich,
}

pub(crate) fn current_output_style() -> OutputStyle {
    output_style_for(
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    )
}

fn output_style_for(is_terminal: bool, no_color: bool) -> OutputStyle {
    if is_terminal && !no_color {
        OutputStyle::Rich
    } else {
        OutputStyle::Plain
    }
}

fn tier_style(tier: CompatibilityTier) -> Style {
    let color = match tier {
        CompatibilityTier::Compatible => AnsiColor::BrightGreen,
        CompatibilityTier::MarginallyCompatible => AnsiColor::BrightYellow,
        CompatibilityTier::Incompatible => AnsiColor::BrightRed,
    };
    Style::new().fg_color(Some(color.into())).effects(Effects::BOLD)
}

fn header_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::BrightBlue.into()))
        .effects(Effects::BOLD)
}

fn colorize(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

fn render_badge(style: OutputStyle, tier: CompatibilityTier) -> String {
    let badge = format!("[{:<12}]", tier.as_str());
    match style {
        OutputStyle::Plain => badge,
        OutputStyle::Rich => colorize(tier_style(tier), &badge),
    }
}

pub(crate) fn format_classification_line(
    version: &str,
    tier: CompatibilityTier,
    style: OutputStyle,
) -> String {
    format!("{} {version}", render_badge(style, tier))
}

pub(crate) fn format_resolution_lines(
    target: &str,
    resolution: &Resolution,
    style: OutputStyle,
) -> Vec<String> {
    let required = resolution.required_major;
    let header = format!("Target: {target} | Java required: {required}+");
    let mut lines = vec![match style {
        OutputStyle::Plain => header,
        OutputStyle::Rich => colorize(header_style(), &header),
    }];

    if resolution.is_empty() {
        lines.push(format!(
            "No Java installation found. Install Java {required} or newer: https://adoptium.net/temurin/releases/?version={required}"
        ));
        return lines;
    }

    for (index, entry) in resolution.ranked.iter().enumerate() {
        let marker = if index == 0 { "*" } else { " " };
        lines.push(format!(
            "{marker} {} {}\t{}\t{}\t{}",
            render_badge(style, entry.tier),
            entry.installation.display_name(),
            entry.installation.kind.as_str(),
            if entry.installation.source.is_empty() {
                "-"
            } else {
                entry.installation.source.as_str()
            },
            entry.installation.path
        ));
    }

    if let (Some(best), Some(tier)) = (&resolution.best, resolution.best_tier()) {
        if tier != CompatibilityTier::Compatible {
            lines.push(format!(
                "warning: best available runtime ({}) is below the required Java {required}",
                best.display_name()
            ));
        }
    }

    lines
}

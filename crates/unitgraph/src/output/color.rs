//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Reference: cyan     (unit names, tree root)
//!   - Success:   green    (finite distances)
//!   - Error:     red      (unreachable targets, conflicts)
//!   - Muted:     dimmed   (connectors, relation labels)
//!   - Emphasis:  bold     (headers)

use crate::analysis::Distance;
use crate::domain::Relation;
use colored::Colorize;

use super::OutputConfig;

/// Colorize a unit name (cyan).
pub(crate) fn colorize_unit(name: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return name.to_string();
    }
    name.cyan().to_string()
}

/// Apply dimmed styling to text.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold styling to text.
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Render a distance: green when reachable, red when not.
pub(crate) fn colorize_distance(distance: Distance, config: &OutputConfig) -> String {
    let text = distance.to_string();
    if !config.use_colors {
        return text;
    }
    if distance.is_finite() {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

/// Render a relation label in parentheses. Conflicts stand out in red.
pub(crate) fn colorize_relation(relation: &Relation, config: &OutputConfig) -> String {
    let text = format!("({relation})");
    if !config.use_colors {
        return text;
    }
    match relation {
        Relation::Conflicts => text.red().to_string(),
        _ => text.dimmed().to_string(),
    }
}

/// Icon marking the root of a tree, with ASCII fallback.
pub(crate) fn root_icon(config: &OutputConfig) -> String {
    let icon = if config.use_ascii { "*" } else { "◆" };
    if !config.use_colors {
        return icon.to_string();
    }
    icon.cyan().bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputConfig {
        OutputConfig::new(false, false)
    }

    #[test]
    fn test_plain_config_leaves_text_untouched() {
        let config = plain();
        assert_eq!(colorize_unit("a.service", &config), "a.service");
        assert_eq!(dimmed("x", &config), "x");
        assert_eq!(bold("x", &config), "x");
        assert_eq!(colorize_distance(Distance::Finite(4), &config), "4");
        assert_eq!(colorize_distance(Distance::Infinite, &config), "unreachable");
        assert_eq!(colorize_relation(&Relation::Wants, &config), "(Wants)");
    }

    #[test]
    fn test_root_icon_ascii_vs_unicode() {
        assert_eq!(root_icon(&OutputConfig::new(true, false)), "*");
        assert_eq!(root_icon(&OutputConfig::new(false, false)), "◆");
    }
}

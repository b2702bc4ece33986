//! Visual theme and styling.

use console::Style;

/// Roofline's visual theme.
#[derive(Debug, Clone)]
pub struct RooflineTheme {
    /// Success messages (green).
    pub success: Style,
    /// Warnings (yellow).
    pub warning: Style,
    /// Errors (red bold).
    pub error: Style,
    /// Headers (cyan bold).
    pub header: Style,
    /// Secondary text.
    pub dim: Style,
    /// Important text.
    pub highlight: Style,
    /// Prices (green bold).
    pub price: Style,
    /// Key labels in key-value displays.
    pub key: Style,
    /// Favorite marker.
    pub favorite: Style,
}

impl Default for RooflineTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RooflineTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().cyan().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            price: Style::new().green().bold(),
            key: Style::new().bold(),
            favorite: Style::new().red(),
        }
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            price: Style::new(),
            key: Style::new(),
            favorite: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("⌂"),
            self.highlight.apply_to(title)
        )
    }

    /// Heart shown next to favorited listings.
    pub fn format_favorite(&self, favorited: bool) -> String {
        if favorited {
            format!("{}", self.favorite.apply_to("♥"))
        } else {
            format!("{}", self.dim.apply_to("♡"))
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_with_icons() {
        let theme = RooflineTheme::plain();
        assert_eq!(theme.format_success("Saved"), "✓ Saved");
        assert_eq!(theme.format_warning("Careful"), "⚠ Careful");
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
        assert_eq!(theme.format_header("Listings"), "⌂ Listings");
    }

    #[test]
    fn favorite_marker() {
        let theme = RooflineTheme::plain();
        assert_eq!(theme.format_favorite(true), "♥");
        assert_eq!(theme.format_favorite(false), "♡");
    }
}

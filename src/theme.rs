//! Series theming for the chart layer.
//!
//! Colors are published as style tokens (CSS custom properties) that the
//! rendering layer resolves by name at paint time, instead of threading
//! explicit color props through every chart. The registry is an owned
//! object with page lifetime; rebinding overwrites the whole token set and
//! never performs a partial update.

use crate::error::ReportError;
use serde::{Deserialize, Serialize};

/// Display label and color for one chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub label: String,
    pub color: String,
}

/// Ordered mapping from series key to its display style. Immutable per
/// render pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesTheme {
    entries: Vec<(String, SeriesStyle)>,
}

impl SeriesTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(
        mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        self.entries.push((
            key.into(),
            SeriesStyle {
                label: label.into(),
                color: color.into(),
            },
        ));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &SeriesStyle)> {
        self.entries.iter().map(|(key, style)| (key.as_str(), style))
    }

    pub fn style(&self, key: &str) -> Option<&SeriesStyle> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, style)| style)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Token name for a series key, e.g. `--color-go`.
pub fn token_name(key: &str) -> String {
    format!("--color-{}", key.to_ascii_lowercase())
}

/// Registry of resolved style tokens for the currently bound theme.
///
/// Shared by every chart on the page; last writer wins.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    bound: SeriesTheme,
    tokens: Vec<(String, String)>,
    revision: u64,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a theme, replacing all previously published tokens.
    ///
    /// Rebinding an identical theme is a no-op with no observable effect.
    /// A malformed theme (empty label or color) is rejected with
    /// `InvalidTheme` and the previous tokens stay in effect.
    pub fn bind(&mut self, theme: &SeriesTheme) -> Result<(), ReportError> {
        if *theme == self.bound {
            return Ok(());
        }

        for (key, style) in theme.entries() {
            if style.color.trim().is_empty() {
                return Err(ReportError::InvalidTheme(format!(
                    "series {key} has no color"
                )));
            }
            if style.label.trim().is_empty() {
                return Err(ReportError::InvalidTheme(format!(
                    "series {key} has no label"
                )));
            }
        }

        self.tokens = theme
            .entries()
            .map(|(key, style)| (token_name(key), style.color.clone()))
            .collect();
        self.bound = theme.clone();
        self.revision += 1;
        Ok(())
    }

    /// Resolved color for a series key, if the key is bound.
    pub fn token(&self, key: &str) -> Option<&str> {
        let name = token_name(key);
        self.tokens
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, color)| color.as_str())
    }

    /// Number of effective mutations since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The `:root` token block shipped in the page stylesheet.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, color) in &self.tokens {
            css.push_str(&format!("    {}: {};\n", name, color));
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> SeriesTheme {
        SeriesTheme::new()
            .with_series("go", "Go", "#00add8")
            .with_series("rust", "Rust", "#dea584")
    }

    #[test]
    fn bind_publishes_one_token_per_series() {
        let mut registry = ThemeRegistry::new();
        registry.bind(&theme()).unwrap();

        assert_eq!(registry.token("go"), Some("#00add8"));
        assert_eq!(registry.token("rust"), Some("#dea584"));
        assert_eq!(registry.token("zig"), None);
        assert_eq!(registry.revision(), 1);
    }

    #[test]
    fn rebinding_an_identical_theme_is_a_no_op() {
        let mut registry = ThemeRegistry::new();
        registry.bind(&theme()).unwrap();
        let css = registry.to_css();

        registry.bind(&theme()).unwrap();
        registry.bind(&theme()).unwrap();

        assert_eq!(registry.revision(), 1);
        assert_eq!(registry.to_css(), css);
    }

    #[test]
    fn rebinding_a_changed_theme_overwrites_all_tokens() {
        let mut registry = ThemeRegistry::new();
        registry.bind(&theme()).unwrap();

        let swapped = SeriesTheme::new().with_series("go", "Go", "#ff0000");
        registry.bind(&swapped).unwrap();

        assert_eq!(registry.token("go"), Some("#ff0000"));
        assert_eq!(registry.token("rust"), None);
        assert_eq!(registry.revision(), 2);
    }

    #[test]
    fn malformed_theme_is_rejected_and_previous_tokens_survive() {
        let mut registry = ThemeRegistry::new();
        registry.bind(&theme()).unwrap();

        let broken = SeriesTheme::new().with_series("go", "Go", "  ");
        let err = registry.bind(&broken).unwrap_err();
        assert!(matches!(err, ReportError::InvalidTheme(_)));

        assert_eq!(registry.token("go"), Some("#00add8"));
        assert_eq!(registry.revision(), 1);
    }

    #[test]
    fn css_block_lists_tokens_in_theme_order() {
        let mut registry = ThemeRegistry::new();
        registry.bind(&theme()).unwrap();

        let css = registry.to_css();
        let go = css.find("--color-go: #00add8;").unwrap();
        let rust = css.find("--color-rust: #dea584;").unwrap();
        assert!(go < rust);
        assert!(css.starts_with(":root {"));
    }
}

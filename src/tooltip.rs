//! Server-rendered tooltip fragments.
//!
//! The dashboard pre-renders one tooltip per chart category; the page
//! script only toggles visibility on hover. Rendering is a pure function
//! of the hover state and payload.

/// One series entry at the hovered category.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub name: String,
    pub value: f64,
}

impl TooltipEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Rendered tooltip content: one (label, value) row per payload entry, in
/// payload order. Duplicate names are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipFragment {
    rows: Vec<(String, f64)>,
}

/// Render the tooltip for the active data points, or nothing when the
/// cursor is not over a category or the payload is empty.
pub fn render(active: bool, payload: &[TooltipEntry]) -> Option<TooltipFragment> {
    if !active || payload.is_empty() {
        return None;
    }

    Some(TooltipFragment {
        rows: payload
            .iter()
            .map(|entry| (entry.name.to_uppercase(), entry.value))
            .collect(),
    })
}

impl TooltipFragment {
    pub fn rows(&self) -> &[(String, f64)] {
        &self.rows
    }

    /// Markup for the hidden tooltip nodes embedded in the page. Labels
    /// are HTML-escaped; values are printed exactly as provided, the
    /// charting layer owns any rounding.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"tooltip-grid\">");
        for (label, value) in &self.rows {
            html.push_str(&format!(
                "<div class=\"tooltip-entry\"><span class=\"tooltip-label\">{}</span><span class=\"tooltip-value\">{}</span></div>",
                escape_html(label),
                value
            ));
        }
        html.push_str("</div>");
        html
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_renders_nothing_even_with_payload() {
        let payload = vec![TooltipEntry::new("Go", 2071.92)];
        assert!(render(false, &payload).is_none());
    }

    #[test]
    fn empty_payload_renders_nothing() {
        assert!(render(true, &[]).is_none());
    }

    #[test]
    fn rows_follow_payload_order_with_uppercase_labels() {
        let payload = vec![
            TooltipEntry::new("Go", 2071.92),
            TooltipEntry::new("Rust", 1347.12),
        ];
        let fragment = render(true, &payload).unwrap();

        assert_eq!(fragment.rows().len(), 2);
        assert_eq!(fragment.rows()[0], ("GO".to_string(), 2071.92));
        assert_eq!(fragment.rows()[1], ("RUST".to_string(), 1347.12));
    }

    #[test]
    fn duplicate_names_are_kept() {
        let payload = vec![
            TooltipEntry::new("Go", 1.0),
            TooltipEntry::new("Go", 2.0),
        ];
        let fragment = render(true, &payload).unwrap();
        assert_eq!(fragment.rows().len(), 2);
        assert_eq!(fragment.rows()[0].1, 1.0);
        assert_eq!(fragment.rows()[1].1, 2.0);
    }

    #[test]
    fn html_escapes_markup_in_labels() {
        let payload = vec![TooltipEntry::new("<b>go & rust</b>", 1.0)];
        let html = render(true, &payload).unwrap().to_html();
        assert!(html.contains("&lt;B&gt;GO &amp; RUST&lt;/B&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn html_keeps_raw_values_unrounded() {
        let payload = vec![TooltipEntry::new("Rust", 1347.12)];
        let html = render(true, &payload).unwrap().to_html();
        assert!(html.contains("RUST"));
        assert!(html.contains("1347.12"));
    }
}

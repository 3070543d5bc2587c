//! Title line followed by `Label: value` rows, shared by `show` and `check`.

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    rows: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push((label.into(), value.into()));
    }

    /// `yes` / `no` row for descriptor flags like `live`
    pub fn add_flag(&mut self, label: impl Into<String>, value: bool) {
        self.add(label, if value { "yes" } else { "no" });
    }

    /// Row for an optional field; `missing` stands in when absent
    pub fn add_optional<T: ToString>(
        &mut self,
        label: impl Into<String>,
        value: Option<T>,
        missing: &str,
    ) {
        let value = value.map_or_else(|| missing.to_string(), |v| v.to_string());
        self.add(label, value);
    }

    /// Comma-joined list row; `empty` stands in for no items
    pub fn add_list(&mut self, label: impl Into<String>, items: &[String], empty: &str) {
        let value = if items.is_empty() {
            empty.to_string()
        } else {
            items.join(", ")
        };
        self.add(label, value);
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        );
        for (label, value) in &self.rows {
            out.push_str(&format!("{}: {}\n", label, value));
        }
        out
    }
}

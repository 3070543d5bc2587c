use std::path::Path;

use forkwise::application::{CheckOptions, CheckResult};

use crate::ui::blocks::check_item::render_check_item;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_check_header(
    project: &Path,
    options: CheckOptions,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "Forkwise Check");
    header.add("Project", project.display().to_string());
    if options.strict_warnings {
        header.add("Strict", "failing on warnings");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_check_report(
    result: &CheckResult,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    result
        .items
        .iter()
        .map(|item| render_check_item(item, verbose > 0, supports_color, supports_unicode))
        .collect()
}

pub fn render_check_summary(
    result: &CheckResult,
    options: CheckOptions,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, title) = if result.fails(options) {
        (Icon::Error, ColoredText::error("Check FAILED"))
    } else if result.warnings > 0 {
        (Icon::Warning, ColoredText::warning("Check passed with warnings"))
    } else {
        (Icon::Success, ColoredText::success("All checks passed"))
    };

    format!(
        "\n{} {}  {} passed, {} warnings, {} errors\n",
        icon.colored(supports_color, supports_unicode),
        title.bold().render(supports_color),
        result.passed,
        result.warnings,
        result.errors
    )
}

use std::path::Path;

use anyhow::Result;
use forkwise::application::CheckOptions;
use forkwise::presentation::create_check_use_case;

use crate::ui::terminal::detect_capabilities;
use crate::ui::views::check::{render_check_header, render_check_report, render_check_summary};

/// Returns whether the check passed under `options`
pub fn cmd_check(root: &Path, strict_warnings: bool, json: bool, verbose: u8) -> Result<bool> {
    let options = CheckOptions { strict_warnings };
    let use_case = create_check_use_case(root)?;

    if json {
        let result = use_case.execute(root)?;
        let passed = !result.fails(options);
        let output = serde_json::json!({
            "event": "complete",
            "command": "check",
            "success": passed,
            "strict_warnings": strict_warnings,
            "passed": result.passed,
            "warnings": result.warnings,
            "errors": result.errors,
            "items": result.items,
        });
        println!("{}", output);
        return Ok(passed);
    }

    let caps = detect_capabilities();
    print!(
        "{}",
        render_check_header(root, options, caps.supports_color, caps.supports_unicode)
    );
    let result = use_case.execute(root)?;
    print!(
        "{}",
        render_check_report(&result, verbose, caps.supports_color, caps.supports_unicode)
    );
    print!(
        "{}",
        render_check_summary(&result, options, caps.supports_color, caps.supports_unicode)
    );

    Ok(!result.fails(options))
}

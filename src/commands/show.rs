use std::path::Path;

use anyhow::{Context, Result};
use forkwise::presentation::{create_resolve_use_case, output, OutputFormat, SecretDisplay, ShowReport};

use crate::ui::terminal::detect_capabilities;
use crate::ui::views::show::render_show;

pub fn cmd_show(
    root: &Path,
    network: Option<&str>,
    format: OutputFormat,
    reveal_secrets: bool,
) -> Result<()> {
    let resolved = create_resolve_use_case(root)?.execute(root)?;
    let report = ShowReport::build(
        &resolved.config,
        network,
        SecretDisplay::from_reveal(reveal_secrets),
    )?;

    match output::encode(format, &report).context("rendering show report")? {
        Some(encoded) => println!("{}", encoded.trim_end()),
        None => {
            let caps = detect_capabilities();
            print!("{}", render_show(&report, caps.supports_color, caps.supports_unicode));
        }
    }
    Ok(())
}

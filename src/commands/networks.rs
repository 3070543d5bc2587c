use std::path::Path;

use anyhow::{Context, Result};
use forkwise::presentation::{create_resolve_use_case, network_reports, output, OutputFormat, SecretDisplay};

use crate::ui::terminal::detect_capabilities;
use crate::ui::views::networks::render_networks;

pub fn cmd_networks(root: &Path, format: OutputFormat, reveal_secrets: bool) -> Result<()> {
    let resolved = create_resolve_use_case(root)?.execute(root)?;
    let reports = network_reports(&resolved.config, SecretDisplay::from_reveal(reveal_secrets));

    match output::encode(format, &reports).context("rendering network list")? {
        Some(encoded) => println!("{}", encoded.trim_end()),
        None => {
            let caps = detect_capabilities();
            print!(
                "{}",
                render_networks(&reports, caps.supports_color, caps.supports_unicode)
            );
        }
    }
    Ok(())
}

use forkwise::presentation::NetworkReport;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

use super::show::kind_label;

pub fn render_networks(
    networks: &[NetworkReport],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = ColoredText::info(format!("{} networks", networks.len()))
        .bold()
        .render(supports_color);
    let mut out = format!(
        "{} {}\n",
        Icon::Network.colored(supports_color, supports_unicode),
        title
    );

    let width = networks.iter().map(|n| n.name.len()).max().unwrap_or(0);
    for network in networks {
        let chain = network
            .chain_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let url = network.url.as_deref().unwrap_or("-");
        let mut line = format!(
            "  {:<width$}  {:<12}  {:<6}  {}",
            network.name,
            kind_label(network.kind),
            chain,
            url,
            width = width
        );

        let mut flags = Vec::new();
        if network.live {
            flags.push("live");
        }
        if network.save_deployments {
            flags.push("save");
        }
        if !flags.is_empty() {
            line.push_str(&ColoredText::dim(format!("  [{}]", flags.join(", "))).render(supports_color));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

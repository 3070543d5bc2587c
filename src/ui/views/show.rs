use forkwise::domain::value_objects::{ForkDirective, NetworkKind};
use forkwise::presentation::ShowReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn kind_label(kind: NetworkKind) -> &'static str {
    match kind {
        NetworkKind::InProcess => "in-process",
        NetworkKind::LocalDaemon => "local-daemon",
        NetworkKind::Remote => "remote",
    }
}

fn fork_label(report: &ShowReport) -> String {
    match &report.fork {
        ForkDirective::NoForward => "not forking".to_string(),
        ForkDirective::ForwardFrom(source) if report.fork_source_declared => {
            format!("forwarding records from '{}'", source)
        }
        ForkDirective::ForwardFrom(source) => {
            format!("forwarding records from '{}' (not a declared network)", source)
        }
    }
}

fn section(out: &mut String, title: &str, lines: &[String], supports_color: bool) {
    out.push('\n');
    out.push_str(&ColoredText::plain(format!("{}:", title)).bold().render(supports_color));
    out.push('\n');
    for line in lines {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
}

pub fn render_show(report: &ShowReport, supports_color: bool, supports_unicode: bool) -> String {
    let network = &report.network;
    let mut header = CommandHeader::new(
        Icon::Network,
        format!("{} / {}", report.project, network.name),
    );
    header.add("Kind", kind_label(network.kind));
    header.add_optional("Endpoint", network.url.as_deref(), "(in-process)");
    header.add_optional("Chain id", network.chain_id, "-");
    header.add_list("Accounts", &network.accounts, "(none)");
    header.add_flag("Live", network.live);
    header.add_flag("Save deployments", network.save_deployments);
    header.add("Fork", fork_label(report));

    let mut out = header.render(supports_color, supports_unicode);

    let arrow = Icon::Arrow.colored(supports_color, supports_unicode);
    let search: Vec<String> = report
        .search_paths
        .iter()
        .map(|p| format!("{} {}", arrow, p.display()))
        .collect();
    section(&mut out, "Search paths", &search, supports_color);

    let compilers: Vec<String> = report
        .compilers
        .iter()
        .map(|c| {
            let optimizer = if c.optimizer.enabled { "on" } else { "off" };
            format!("{} (optimizer {}, {} runs)", c.version, optimizer, c.optimizer.runs)
        })
        .collect();
    section(&mut out, "Compilers", &compilers, supports_color);

    let accounts: Vec<String> = report
        .named_accounts
        .iter()
        .map(|(name, index)| format!("{} = {}", name, index))
        .collect();
    section(&mut out, "Named accounts", &accounts, supports_color);

    let paths = &report.paths;
    let dirs: Vec<String> = [
        ("sources", &paths.sources),
        ("tests", &paths.tests),
        ("cache", &paths.cache),
        ("artifacts", &paths.artifacts),
        ("deployments", &paths.deployments),
        ("typechain", &paths.typechain),
    ]
    .iter()
    .map(|(label, path)| format!("{}: {}", label, path.display()))
    .collect();
    section(&mut out, "Paths", &dirs, supports_color);

    out.push('\n');
    if report.verification.enabled {
        out.push_str(&format!(
            "Verification: enabled, API key {}\n",
            report.verification.api_key
        ));
    } else {
        out.push_str("Verification: disabled\n");
    }

    let gas = &report.gas_reporter;
    out.push_str(&format!("Gas reporter: {} at {} gwei", gas.currency, gas.gas_price));
    if let Some(key) = &gas.coinmarketcap {
        out.push_str(&format!(", pricing key {}", key));
    }
    out.push('\n');
    out.push_str(&format!("Test timeout: {} ms\n", report.test_timeout_ms));

    out
}

use forkwise::ForkwiseError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_stderr_capabilities;

/// One-line hint for errors the user can fix directly
fn hint(err: &ForkwiseError) -> Option<String> {
    match err {
        ForkwiseError::UnknownNetwork { .. } => {
            Some("run 'forkwise networks' to list declared networks".to_string())
        }
        ForkwiseError::UnknownForkSource { .. } => Some(
            "set HARDHAT_FORK to a declared network, or unset FORKWISE_FORK_POLICY=strict"
                .to_string(),
        ),
        ForkwiseError::CatalogVersion { expected, .. } => {
            Some(format!("set [networks] catalog = {}", expected))
        }
        ForkwiseError::UnresolvedPlaceholder { .. } => {
            Some("only ${INFURA_KEY} may appear in endpoint urls".to_string())
        }
        ForkwiseError::MissingEndpoint { network } => {
            Some(format!("add url = \"...\" under [networks.custom.{}]", network))
        }
        _ => None,
    }
}

pub fn format_error_with(
    err: &anyhow::Error,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    let mut out = format!(
        "{} {}\n",
        icon,
        ColoredText::error(format!("{:#}", err)).render(supports_color)
    );
    if let Some(hint) = err.downcast_ref::<ForkwiseError>().and_then(hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        println!("{}", output);
        return;
    }

    let caps = detect_stderr_capabilities();
    eprint!(
        "{}",
        format_error_with(err, caps.supports_color, caps.supports_unicode)
    );
}

//! Property tests for secret resolution and redaction.

use proptest::prelude::*;

use forkwise::application::assemble;
use forkwise::config::{ConfigInputs, ProjectFile};
use forkwise::domain::services::resolve_secret;
use forkwise::domain::value_objects::{SecretKind, PLACEHOLDER_SIGNING_KEY};
use forkwise::infrastructure::MapSource;

fn secret_kind() -> impl Strategy<Value = SecretKind> {
    prop_oneof![Just(SecretKind::SigningKey), Just(SecretKind::ApiKey)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolution is total. A non-empty input is used verbatim,
    /// anything else falls back to the kind's default.
    #[test]
    fn property_resolution_is_total(
        raw in proptest::option::of(".{0,80}"),
        kind in secret_kind(),
    ) {
        let secret = resolve_secret("INPUT", kind, raw.as_deref());
        match raw.as_deref() {
            Some(value) if !value.is_empty() => {
                prop_assert_eq!(secret.expose(), value);
                prop_assert!(!secret.is_defaulted());
            }
            _ => {
                prop_assert_eq!(secret.expose(), kind.default_value());
                prop_assert!(secret.is_defaulted());
            }
        }
    }

    /// PROPERTY: Redaction never reproduces a supplied value.
    #[test]
    fn property_redaction_hides_value(value in "[A-Za-z0-9]{1,80}", kind in secret_kind()) {
        let secret = resolve_secret("INPUT", kind, Some(&value));
        prop_assert_ne!(secret.redacted(), value);
    }

    /// PROPERTY: Assembly never fails for missing or arbitrary key inputs,
    /// and signer networks always carry a usable key.
    #[test]
    fn property_assembly_accepts_any_keys(
        deployer in proptest::option::of("[ -~]{0,66}"),
        etherscan in proptest::option::of("[ -~]{0,40}"),
    ) {
        let mut source = MapSource::new();
        if let Some(value) = &deployer {
            source.set("RINKEBY_PRIVATE_KEY", value.as_str());
        }
        if let Some(value) = &etherscan {
            source.set("ETHERSCAN_API_KEY", value.as_str());
        }

        let config = assemble(
            &ProjectFile::default(),
            ConfigInputs::resolve(&source),
            std::path::Path::new("/work/p"),
        );
        prop_assert!(config.is_ok());
        let config = config.unwrap();
        let mainnet = config.network("mainnet").unwrap();
        let expected = match deployer.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => PLACEHOLDER_SIGNING_KEY,
        };
        prop_assert_eq!(mainnet.credentials(), vec![expected]);
    }
}

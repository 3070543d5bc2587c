//! Property tests for fork forwarding.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use forkwise::domain::services::{external_deployments, search_paths, FORWARDED_NETWORKS};
use forkwise::ForkDirective;

fn network_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Only hardhat and localhost ever gain external record paths,
    /// and each gains exactly `<records>/<source>`.
    #[test]
    fn property_forward_targets_only_in_process_networks(source in network_name()) {
        let root = Path::new("/work/p/deployments");
        let external = external_deployments(&ForkDirective::from_input(Some(&source)), root);

        prop_assert_eq!(external.len(), FORWARDED_NETWORKS.len());
        for network in FORWARDED_NETWORKS {
            prop_assert_eq!(&external[network], &vec![root.join(&source)]);
        }
    }

    /// PROPERTY: Computing the override twice gives the same result.
    #[test]
    fn property_forwarding_is_deterministic(source in proptest::option::of(network_name())) {
        let root = Path::new("deployments");
        let directive = ForkDirective::from_input(source.as_deref());
        prop_assert_eq!(
            external_deployments(&directive, root),
            external_deployments(&directive, root)
        );
    }

    /// PROPERTY: A network's own directory always comes first and no path
    /// repeats.
    #[test]
    fn property_search_paths_own_first_no_duplicates(
        source in proptest::option::of(network_name()),
        network in prop_oneof![Just("hardhat".to_string()), Just("localhost".to_string()), network_name()],
    ) {
        let root = PathBuf::from("deployments");
        let external = external_deployments(&ForkDirective::from_input(source.as_deref()), &root);
        let paths = search_paths(&network, &root, &external);

        prop_assert_eq!(&paths[0], &root.join(&network));
        let mut unique = paths.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), paths.len());
        prop_assert!(paths.len() <= 2);
    }

    /// PROPERTY: Only empty input disables forwarding; anything else is
    /// kept verbatim.
    #[test]
    fn property_input_is_kept_verbatim(raw in "[ \ta-z]{0,8}") {
        let directive = ForkDirective::from_input(Some(&raw));
        if raw.is_empty() {
            prop_assert_eq!(directive, ForkDirective::NoForward);
        } else {
            prop_assert_eq!(directive.source(), Some(raw.as_str()));
        }
    }

    /// PROPERTY: Whatever the name, including separators and absolute
    /// paths, the forked directory stays under the records root.
    #[test]
    fn property_forked_path_stays_under_records_root(source in r"[/\\]{0,3}[a-z./\\]{1,20}") {
        let root = Path::new("/work/p/deployments");
        let external = external_deployments(&ForkDirective::from_input(Some(&source)), root);

        for network in FORWARDED_NETWORKS {
            for path in &external[network] {
                prop_assert!(path.starts_with(root), "{} escapes", path.display());
            }
        }
    }
}

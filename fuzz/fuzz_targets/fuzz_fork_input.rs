#![no_main]

use std::path::Path;

use forkwise::domain::services::{external_deployments, search_paths, FORWARDED_NETWORKS};
use forkwise::ForkDirective;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let directive = ForkDirective::from_input(Some(input));
        let records = Path::new("deployments");
        let external = external_deployments(&directive, records);

        for network in FORWARDED_NETWORKS {
            let paths = search_paths(network, records, &external);
            assert_eq!(paths[0], records.join(network));
            assert!(paths.len() <= 2);
        }
    }
});

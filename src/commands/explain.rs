use anyhow::Result;
use forkwise::config::{
    COINMARKETCAP_KEY_VAR, DEPLOYER_KEY_VAR, ETHERSCAN_KEY_VAR, FORK_POLICY_VAR, FORK_VAR,
    PROJECT_FILE_NAME, RPC_KEY_VAR,
};

pub fn cmd_explain(brief: bool, json: bool, verbose: u8) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "name": "forkwise",
            "version": env!("CARGO_PKG_VERSION"),
            "purpose": "Resolve networks, credentials and compiler settings for contract deployments",
            "files": {
                PROJECT_FILE_NAME: "Project settings (compilers, paths, networks, fork policy)",
                ".env": "Optional inputs; the process environment wins",
                "deployments/<network>/": "Published deployment records, read-only"
            },
            "inputs": {
                DEPLOYER_KEY_VAR: "Deployer signing key (default: all-zero placeholder)",
                ETHERSCAN_KEY_VAR: "Verification service key (default: empty)",
                COINMARKETCAP_KEY_VAR: "Gas pricing key (default: empty)",
                RPC_KEY_VAR: "RPC provider key for ${INFURA_KEY} endpoints (default: empty)",
                FORK_VAR: "Network the local chain forks; hardhat/localhost also read its records",
                FORK_POLICY_VAR: "lenient | strict handling of an undeclared fork source"
            },
            "commands": {
                "forkwise show": "Resolved configuration for the default (or --network) network",
                "forkwise networks": "Every declared network",
                "forkwise paths --network NAME": "Deployment record search paths",
                "forkwise check": "Validate configuration (non-zero exit on errors)",
                "forkwise explain": "This help"
            }
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Forkwise v{}", env!("CARGO_PKG_VERSION"));
    println!("Deployment environment resolver for contract projects.\n");

    if brief {
        println!("KEY COMMANDS:");
        println!("  forkwise show [--network NAME] [--format text|json|yaml]");
        println!("  forkwise networks");
        println!("  forkwise paths --network NAME");
        println!("  forkwise check [--strict-warnings]");
        return Ok(());
    }

    println!("FILES:");
    println!("  {:<22}Project settings (compilers, paths, networks, fork)", PROJECT_FILE_NAME);
    println!("  {:<22}Optional inputs; the process environment wins", ".env");
    println!("  {:<22}Published deployment records (read, never written)\n", "deployments/<network>/");

    println!("INPUTS:");
    println!("  {:<24}deployer signing key (absent: all-zero placeholder)", DEPLOYER_KEY_VAR);
    println!("  {:<24}verification service key (absent: empty)", ETHERSCAN_KEY_VAR);
    println!("  {:<24}gas pricing key (absent: empty)", COINMARKETCAP_KEY_VAR);
    println!("  {:<24}RPC provider key substituted into endpoints", RPC_KEY_VAR);
    println!("  {:<24}network the local chain forks", FORK_VAR);
    println!("  {:<24}lenient (default) or strict\n", FORK_POLICY_VAR);

    println!("FORKING:");
    println!("  With {}=mainnet, hardhat and localhost look for deployment", FORK_VAR);
    println!("  records in deployments/<self>/ first, then deployments/mainnet/.\n");

    println!("KEY COMMANDS:");
    println!("  forkwise show");
    println!("  forkwise networks");
    println!("  forkwise paths --network hardhat");
    println!("  forkwise check\n");

    if verbose > 0 {
        println!("EXAMPLES:");
        println!("  # Inspect bsc with keys visible");
        println!("  forkwise show --network bsc --reveal-secrets\n");
        println!("  # Search paths while forking mainnet");
        println!("  {}=mainnet forkwise paths --network hardhat\n", FORK_VAR);
        println!("  # CI-friendly check (fail on warnings)");
        println!("  forkwise check --strict-warnings\n");
    }

    Ok(())
}

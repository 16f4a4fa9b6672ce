//! Orange allowlist - Main Entry Point
//!
//! Builds the allowlist tree, installs its root in a registry, publishes the
//! per-member proofs and optionally plans the vault deployment.

use orange_allowlist::*;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Malformed settings abort before anything is built
    let config = CONFIG.clone().map_err(anyhow::Error::msg).context("Invalid configuration")?;

    let output_dir = Path::new(config::OUTPUT_DIR);
    utils::setup_output_directories(output_dir)?;
    let _logging_guard = utils::setup_logging(output_dir, config.log_json)?;

    info!("🍊 Orange Allowlist v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   Network: {}", config.network);
    info!("   Allowlist file: {}", config.allowlist_file);
    info!("   Allowlist enabled: {}", config.allowlist_enabled);
    info!("   Plan vault deployment: {}", config.plan_vault_deployment);

    let address_book = match &config.address_book_file {
        Some(file) => {
            let json = tokio::fs::read_to_string(file)
                .await
                .with_context(|| format!("Failed to read address book {}", file))?;
            AddressBook::from_json(&json)?
        }
        None => AddressBook::builtin(),
    };
    let addresses = address_book.network(&config.network).inspect_err(|_| {
        let mut known: Vec<&str> = address_book.networks().collect();
        known.sort();
        error!("Known networks: {}", known.join(", "));
    })?;
    utils::print_network_addresses(addresses);

    let owner = match config.allowlist_owner {
        Some(owner) => owner,
        None => addresses
            .get(Contract::Deployer)
            .context("ALLOWLIST_OWNER is unset and the network has no Deployer")?,
    };

    // Build tree and install root
    let members = storage::load_allowlist(&config.allowlist_file).await?;
    let tree = AllowlistTree::from_identities(members)?;

    let mut registry = AllowlistRegistry::new(owner, true);
    registry.set_root(owner, tree.root())?;
    if !config.allowlist_enabled {
        registry.set_enabled(owner, false)?;
    }

    let snapshot = storage::build_snapshot(&tree, &config.network, registry.is_enabled())?;
    storage::save_allowlist_snapshot(output_dir, &snapshot)?;
    utils::print_snapshot_summary(&snapshot, &registry);

    if let Some(caller) = config.verify_caller {
        // Non-members are checked with an empty proof
        let proof = if tree.contains(caller) {
            tree.proof(caller)?
        } else {
            info!("{} is not in {}, checking with an empty proof", caller, config.allowlist_file);
            Vec::new()
        };
        match registry.verify(caller, &proof) {
            Ok(()) => info!("✅ {} passes the allowlist check", caller),
            Err(e) => warn!(kind = e.kind(), "❌ {}", e),
        }
    }

    if config.plan_vault_deployment {
        match deployment::plan_orange_alpha_vault(addresses, VaultMetadata::default()) {
            Ok(plan) => {
                storage::save_deployment_plan(output_dir, &plan)?;
                utils::print_deployment_plan(&plan);
            }
            Err(e) => {
                error!(kind = e.kind(), "Vault deployment plan failed: {}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}

//! Display and printing utilities

use tracing::{info, warn};
use crate::{
    allowlist::AllowlistRegistry,
    types::{AllowlistSnapshot, DeploymentPlan, NetworkAddresses},
};

pub fn print_snapshot_summary(snapshot: &AllowlistSnapshot, registry: &AllowlistRegistry) {
    info!("\n🌳 Allowlist for {}", snapshot.network);
    info!("   Owner: {}", registry.owner());
    info!("   Root: {}", snapshot.root);
    info!("   Members: {}", snapshot.members.len());
    info!("   Gating: {}", if snapshot.enabled { "ENABLED" } else { "DISABLED" });
    for member in &snapshot.members {
        info!("     {} ({} proof nodes)", member.address, member.proof.len());
    }
}

pub fn print_network_addresses(addresses: &NetworkAddresses) {
    info!(
        "\n📒 Address book: {} ({} of {} deployed)",
        addresses.network,
        addresses.deployed().count(),
        addresses.entries.len()
    );
    for (contract, addr) in &addresses.entries {
        match addr {
            Some(addr) => info!("   {:<28} {}", contract.as_str(), addr),
            None => warn!("   {:<28} <not deployed>", contract.as_str()),
        }
    }
}

pub fn print_deployment_plan(plan: &DeploymentPlan) {
    info!("\n🚀 Deployment plan {} on {}", plan.contract, plan.network);
    info!("   Token: {} ({}) - {} decimals", plan.metadata.name, plan.metadata.symbol, plan.metadata.decimals);
    for (lib, addr) in &plan.libraries {
        info!("   Library {}: {}", lib, addr);
    }
    info!("   Constructor args: {}", plan.constructor_args.len());
    info!("   Encoded: {}", plan.encoded_constructor_args());
}

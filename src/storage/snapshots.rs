//! Allowlist snapshot storage

use anyhow::Result;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::{
    allowlist::AllowlistTree,
    types::AllowlistSnapshot,
};

pub fn build_snapshot(tree: &AllowlistTree, network: &str, enabled: bool) -> Result<AllowlistSnapshot> {
    Ok(AllowlistSnapshot {
        id: uuid::Uuid::new_v4().to_string(),
        timestamp: Utc::now(),
        network: network.to_string(),
        root: tree.root(),
        enabled,
        duplicates_dropped: tree.duplicates(),
        members: tree.member_proofs()?,
    })
}

pub fn save_allowlist_snapshot(output_dir: &Path, snapshot: &AllowlistSnapshot) -> Result<PathBuf> {
    // id suffix keeps same-second runs apart
    let short_id: String = snapshot.id.chars().take(8).collect();
    let filename = output_dir.join("allowlist").join(format!(
        "allowlist_{}_{}_{}.json",
        snapshot.network,
        snapshot.timestamp.format("%Y-%m-%dT%H%M%S"),
        short_id
    ));

    fs::write(&filename, serde_json::to_string_pretty(snapshot)?)?;

    info!(
        snapshot_id = %snapshot.id,
        root = %snapshot.root,
        members = snapshot.members.len(),
        file = %filename.display(),
        "Saved allowlist snapshot"
    );

    Ok(filename)
}

//! Deployment plan storage

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::types::DeploymentPlan;

pub fn save_deployment_plan(output_dir: &Path, plan: &DeploymentPlan) -> Result<PathBuf> {
    let filename = output_dir
        .join("deployments")
        .join(format!("{}_{}.json", plan.network, plan.contract));

    let mut doc = serde_json::to_value(plan)?;
    doc["encoded_constructor_args"] = serde_json::Value::String(plan.encoded_constructor_args().to_string());
    fs::write(&filename, serde_json::to_string_pretty(&doc)?)?;

    info!(
        plan_id = %plan.id,
        file = %filename.display(),
        "Saved deployment plan"
    );

    Ok(filename)
}

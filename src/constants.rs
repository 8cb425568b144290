// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubeconfig location relative to the invoking user's home directory
pub const KUBECONFIG_RELATIVE_PATH: &str = ".kube/config";

/// Report file names, one per category
pub mod output {
    pub const GOOD: &str = "good_deployments.txt";
    pub const HA: &str = "ha_deployments.txt";
    pub const NO_PDB: &str = "no_pdb_deployments.txt";
    pub const MISCONFIGURED: &str = "misconfigured_deployments.txt";
}

/// HA policy thresholds
pub mod policy {
    /// Largest minAvailable / maxUnavailable a compliant PDB may declare
    pub const MAX_TOLERATED_DISRUPTION: i32 = 1;
    /// Replica count from which a compliant deployment counts as HA
    pub const HA_MIN_REPLICAS: i32 = 2;
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation: in-cluster credentials first, local kubeconfig second.

use crate::config::Config;
use crate::error::{AuditError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a client for the cluster under audit
#[instrument(skip(config))]
pub async fn connect(config: &Config) -> Result<Client> {
    let client_config = match KConfig::incluster() {
        Ok(c) => {
            info!("Using in-cluster configuration");
            c
        }
        Err(e) => {
            debug!("In-cluster configuration unavailable: {}", e);
            let Some(path) = config.kubeconfig_path.as_deref() else {
                return Err(AuditError::Connection(
                    "not running in a cluster and HOME is not set".to_string(),
                ));
            };
            load_kubeconfig(path).await?
        }
    };

    Client::try_from(client_config)
        .map_err(|e| AuditError::Connection(format!("Failed to create client: {}", e)))
}

/// Build a client config from the kubeconfig file at `path`, using its current context.
/// Relative certificate and key paths resolve against the file's directory.
async fn load_kubeconfig(path: &Path) -> Result<KConfig> {
    info!("Loading kubeconfig from {}", path.display());

    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        AuditError::Connection(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| AuditError::Connection(format!("Failed to create config: {}", e)))
}

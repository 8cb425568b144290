// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! PodDisruptionBudget lookup

use k8s_openapi::api::policy::v1::PodDisruptionBudget;
use kube::{Api, Client};
use tracing::{debug, instrument, warn};

/// Fetch the PDB named `name` in `namespace`.
///
/// Lookup failures are not fatal: any error, not only a 404, yields `None`.
#[instrument(skip(client))]
pub async fn get_pdb(client: &Client, namespace: &str, name: &str) -> Option<PodDisruptionBudget> {
    let pdbs: Api<PodDisruptionBudget> = Api::namespaced(client.clone(), namespace);

    match pdbs.get(name).await {
        Ok(pdb) => Some(pdb),
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("No PDB {}/{}", namespace, name);
            None
        }
        Err(e) => {
            warn!("Failed to get PDB {}/{}, treating as missing: {}", namespace, name, e);
            None
        }
    }
}

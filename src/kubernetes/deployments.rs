// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment listing

use crate::error::{AuditError, Result};
use k8s_openapi::api::apps::v1::Deployment;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// List the deployments of one namespace, in the order the API server returns them
#[instrument(skip(client))]
pub async fn list_deployments(client: &Client, namespace: &str) -> Result<Vec<Deployment>> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    let deployment_list = deployments
        .list(&ListParams::default())
        .await
        .map_err(|source| AuditError::ListDeployments {
            namespace: namespace.to_string(),
            source,
        })?;

    debug!(
        "Listed {} deployments in namespace {}",
        deployment_list.items.len(),
        namespace
    );

    Ok(deployment_list.items)
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace listing

use crate::error::{AuditError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::{debug, instrument};

/// List the names of all namespaces, in the order the API server returns them
#[instrument(skip(client))]
pub async fn list_namespaces(client: &Client) -> Result<Vec<String>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let namespace_list = namespaces
        .list(&ListParams::default())
        .await
        .map_err(AuditError::ListNamespaces)?;

    debug!("Listed {} namespaces", namespace_list.items.len());

    Ok(namespace_list.items.iter().map(|ns| ns.name_any()).collect())
}

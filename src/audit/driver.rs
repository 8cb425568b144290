// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Walks every namespace and deployment and classifies each one.

use crate::audit::classifier::{classify, pdb_verdict, PdbThresholds};
use crate::error::{AuditError, Result};
use crate::kubernetes::{get_pdb, list_deployments, list_namespaces};
use crate::types::AuditReport;
use k8s_openapi::api::apps::v1::Deployment;
use kube::{Client, ResourceExt};
use tracing::{debug, info, instrument};

/// Audit every deployment in the cluster.
///
/// Namespaces and deployments are visited sequentially in listing order, so each
/// category in the returned report is in traversal order. A listing failure stops
/// the run, as does a deployment without a replica count once its PDB is
/// compliant. A failed PDB lookup only classifies that deployment as `no_pdb`.
#[instrument(skip(client))]
pub async fn run_audit(client: &Client) -> Result<AuditReport> {
    let mut report = AuditReport::default();

    let namespaces = list_namespaces(client).await?;
    info!("Found {} namespaces", namespaces.len());

    for namespace in &namespaces {
        audit_namespace(client, namespace, &mut report).await?;
    }

    Ok(report)
}

async fn audit_namespace(client: &Client, namespace: &str, report: &mut AuditReport) -> Result<()> {
    let deployments = list_deployments(client, namespace).await?;

    for deployment in &deployments {
        let name = deployment.name_any();

        let thresholds = get_pdb(client, namespace, &name)
            .await
            .map(|pdb| PdbThresholds::from_pdb(&pdb));

        // Replicas only matter once the PDB itself is compliant
        let category = match pdb_verdict(thresholds.as_ref()) {
            Some(category) => category,
            None => classify(declared_replicas(deployment, namespace)?, thresholds.as_ref()),
        };

        debug!("Deployment {}/{} classified as {}", namespace, name, category);
        report.push(category, name);
    }

    Ok(())
}

fn declared_replicas(deployment: &Deployment, namespace: &str) -> Result<i32> {
    deployment
        .spec
        .as_ref()
        .and_then(|s| s.replicas)
        .ok_or_else(|| AuditError::MissingReplicas {
            namespace: namespace.to_string(),
            name: deployment.name_any(),
        })
}

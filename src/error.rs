// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to connect to cluster: {0}")]
    Connection(String),

    #[error("Failed to list namespaces")]
    ListNamespaces(#[source] kube::Error),

    #[error("Failed to list deployments in namespace {namespace}")]
    ListDeployments {
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("Deployment {namespace}/{name} has no replica count set")]
    MissingReplicas { namespace: String, name: String },

    #[error("Failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AuditError>;

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster access: connection, namespace and deployment listing, PDB lookup.

pub mod client;
pub mod deployments;
pub mod namespaces;
pub mod pdb;

pub use client::connect;
pub use deployments::list_deployments;
pub use namespaces::list_namespaces;
pub use pdb::get_pdb;

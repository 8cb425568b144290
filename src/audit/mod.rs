// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment classification and the cluster-wide audit run.

pub mod classifier;
pub mod driver;

pub use classifier::{classify, pdb_verdict, PdbThresholds};
pub use driver::run_audit;

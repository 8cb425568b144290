// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HA policy decision for a single deployment.

use crate::constants::policy::{HA_MIN_REPLICAS, MAX_TOLERATED_DISRUPTION};
use crate::types::Category;
use k8s_openapi::api::policy::v1::PodDisruptionBudget;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

/// Threshold fields of a PodDisruptionBudget, read as absolute counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdbThresholds {
    pub min_available: Option<i32>,
    pub max_unavailable: Option<i32>,
}

impl PdbThresholds {
    pub fn from_pdb(pdb: &PodDisruptionBudget) -> Self {
        let spec = pdb.spec.as_ref();
        Self {
            min_available: spec.and_then(|s| s.min_available.as_ref()).map(int_value),
            max_unavailable: spec
                .and_then(|s| s.max_unavailable.as_ref())
                .map(int_value),
        }
    }
}

/// Integer reading of an IntOrString. Strings that do not parse as an
/// integer, percentages included, read as 0. Out-of-range strings saturate.
pub fn int_value(value: &IntOrString) -> i32 {
    match value {
        IntOrString::Int(i) => *i,
        IntOrString::String(s) => s
            .parse::<i64>()
            .map(|v| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
            .unwrap_or(0),
    }
}

/// Category decided by the PDB alone, or `None` when the PDB is compliant
/// and the replica count has to settle it.
pub fn pdb_verdict(pdb: Option<&PdbThresholds>) -> Option<Category> {
    let Some(pdb) = pdb else {
        return Some(Category::NoPdb);
    };

    let (min_available, max_unavailable) = match (pdb.min_available, pdb.max_unavailable) {
        (None, None) => return Some(Category::Misconfigured),
        (None, Some(max)) => (0, max),
        // maxUnavailable is not consulted once minAvailable is set
        (Some(min), _) => (min, 0),
    };

    if min_available > MAX_TOLERATED_DISRUPTION || max_unavailable > MAX_TOLERATED_DISRUPTION {
        return Some(Category::Misconfigured);
    }

    None
}

/// Classify a deployment from its replica count and the PDB found for it, if any.
pub fn classify(replicas: i32, pdb: Option<&PdbThresholds>) -> Category {
    if let Some(category) = pdb_verdict(pdb) {
        return category;
    }

    if replicas >= HA_MIN_REPLICAS {
        Category::Ha
    } else {
        Category::Good
    }
}

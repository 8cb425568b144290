// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::output;
use std::fmt;

/// HA posture of a single deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Single replica behind a compliant PDB
    Good,
    /// Two or more replicas behind a compliant PDB
    Ha,
    /// No PDB named after the deployment
    NoPdb,
    /// PDB thresholds exceed the policy, or neither threshold is set
    Misconfigured,
}

impl Category {
    /// All categories, in the order their reports are written
    pub const ALL: [Category; 4] = [
        Category::Good,
        Category::Ha,
        Category::NoPdb,
        Category::Misconfigured,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Good => "good",
            Category::Ha => "ha",
            Category::NoPdb => "no_pdb",
            Category::Misconfigured => "misconfigured",
        }
    }

    /// Name of the report file holding this category
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Good => output::GOOD,
            Category::Ha => output::HA,
            Category::NoPdb => output::NO_PDB,
            Category::Misconfigured => output::MISCONFIGURED,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Deployment names collected per category, in traversal order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    good: Vec<String>,
    ha: Vec<String>,
    no_pdb: Vec<String>,
    misconfigured: Vec<String>,
}

impl AuditReport {
    pub fn push(&mut self, category: Category, name: String) {
        self.bucket_mut(category).push(name);
    }

    pub fn names(&self, category: Category) -> &[String] {
        match category {
            Category::Good => &self.good,
            Category::Ha => &self.ha,
            Category::NoPdb => &self.no_pdb,
            Category::Misconfigured => &self.misconfigured,
        }
    }

    /// Number of deployments recorded across all categories
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.names(*c).len()).sum()
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Good => &mut self.good,
            Category::Ha => &mut self.ha,
            Category::NoPdb => &mut self.no_pdb,
            Category::Misconfigured => &mut self.misconfigured,
        }
    }
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Report files: one deployment name per line, one file per category.

use crate::error::{AuditError, Result};
use crate::types::{AuditReport, Category};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Write every category of `report` into `dir`, returning the written paths
pub fn write_report(dir: &Path, report: &AuditReport) -> Result<Vec<PathBuf>> {
    Category::ALL
        .iter()
        .map(|category| write_category(dir, *category, report.names(*category)))
        .collect()
}

/// Create or truncate the category's report file and write `names` in order
#[instrument(skip(names), fields(count = names.len()))]
pub fn write_category(dir: &Path, category: Category, names: &[String]) -> Result<PathBuf> {
    let path = dir.join(category.file_name());
    let io_error = |source| AuditError::Io {
        path: path.clone(),
        source,
    };

    let mut writer = BufWriter::new(File::create(&path).map_err(io_error)?);
    for name in names {
        writeln!(writer, "{}", name).map_err(io_error)?;
    }
    writer.flush().map_err(io_error)?;

    info!("Wrote {} {} deployments to {}", names.len(), category, path.display());
    Ok(path)
}

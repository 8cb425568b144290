// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::KUBECONFIG_RELATIVE_PATH;
use anyhow::{Context, Result};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Run configuration resolved from the process environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig used when in-cluster credentials are unavailable
    pub kubeconfig_path: Option<PathBuf>,
    /// Directory the category reports are written to
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment: `HOME` and the working directory
    pub fn from_env() -> Result<Self> {
        let output_dir =
            env::current_dir().context("Failed to resolve the current working directory")?;

        Ok(Config {
            kubeconfig_path: kubeconfig_path_from_home(env::var_os("HOME")),
            output_dir,
        })
    }
}

fn kubeconfig_path_from_home(home: Option<OsString>) -> Option<PathBuf> {
    home.filter(|h| !h.is_empty())
        .map(|h| PathBuf::from(h).join(KUBECONFIG_RELATIVE_PATH))
}

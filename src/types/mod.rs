// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Audit result types.

pub mod category;

pub use category::{AuditReport, Category};

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::record::Record;

/// Source of the initial records for a view.
pub trait RecordProvider<R> {
    fn load(&self) -> Result<Vec<R>>;

    /// Short label for error messages and logs.
    fn describe(&self) -> String;
}

/// In-memory records, handed out as a fresh copy on every load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureProvider<R> {
    records: Vec<R>,
}

impl<R> FixtureProvider<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<R: Record> RecordProvider<R> for FixtureProvider<R> {
    fn load(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} fixture ({} records)", R::VIEW, self.records.len())
    }
}

/// A JSON array of records on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/<view>.json` for the record type `R`.
    pub fn for_view<R: Record>(dir: &Path) -> Self {
        Self::new(dir.join(format!("{}.json", R::VIEW)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl<R: Record + DeserializeOwned> RecordProvider<R> for JsonFileProvider {
    fn load(&self) -> Result<Vec<R>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read {} data file {}", R::VIEW, self.path.display()))?;
        let records: Vec<R> = serde_json::from_str(&raw).with_context(|| {
            format!(
                "decode {} data file {}; expected a JSON array of {} records",
                R::VIEW,
                self.path.display(),
                R::VIEW
            )
        })?;
        debug!(
            view = R::VIEW,
            path = %self.path.display(),
            count = records.len(),
            "loaded records"
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

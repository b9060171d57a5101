// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use quickbite_app::Console;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;
const APP_NAME: &str = "quickbite";
const DEFAULT_CONSOLE: &str = "admin";
const DEFAULT_USER: &str = "admin@quickbite.local";
const DEFAULT_LOG_FILTER: &str = "warn";
pub const CONFIG_PATH_ENV: &str = "QUICKBITE_CONFIG_PATH";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub session: SessionSection,
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub log: LogSection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            session: SessionSection::default(),
            data: DataSection::default(),
            log: LogSection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSection {
    pub console: Option<String>,
    pub user: Option<String>,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            console: Some(DEFAULT_CONSOLE.to_owned()),
            user: Some(DEFAULT_USER.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSection {
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
    pub filter: Option<String>,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: Some(DEFAULT_LOG_FILTER.to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set {CONFIG_PATH_ENV} to the config file")
        })?;
        Ok(config_root.join(APP_NAME).join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [session], [data], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(console) = &self.session.console
            && Console::parse(console).is_none()
        {
            bail!(
                "session.console in {} is {:?}; use one of: admin, partner, restaurant",
                path.display(),
                console
            );
        }

        if let Some(user) = &self.session.user
            && user.trim().is_empty()
        {
            bail!(
                "session.user in {} is empty -- enter an email address and retry",
                path.display()
            );
        }

        if let Some(dir) = &self.data.dir {
            validate_data_dir(dir)
                .with_context(|| format!("invalid data.dir in {}", path.display()))?;
        }

        Ok(())
    }

    pub fn console(&self) -> Console {
        self.session
            .console
            .as_deref()
            .and_then(Console::parse)
            .unwrap_or(Console::Admin)
    }

    pub fn user(&self) -> &str {
        self.session.user.as_deref().unwrap_or(DEFAULT_USER)
    }

    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data.dir.as_deref().map(PathBuf::from)
    }

    pub fn log_filter(&self) -> &str {
        self.log.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# quickbite config\n# Place this file at: {}\n\nversion = 1\n\n[session]\n# admin | partner | restaurant\nconsole = \"{}\"\nuser = \"{}\"\n\n[data]\n# Optional. <dir>/<view>.json replaces the demo records for that view\n# dir = \"/absolute/path/to/fixtures\"\n\n[log]\n# Overridden by QUICKBITE_LOG\nfilter = \"{}\"\n",
            path.display(),
            DEFAULT_CONSOLE,
            DEFAULT_USER,
            DEFAULT_LOG_FILTER,
        )
    }
}

pub fn validate_data_dir(dir: &str) -> Result<()> {
    if dir.trim().is_empty() {
        bail!("data directory must not be empty");
    }

    if let Some(index) = dir.find("://")
        && index > 0
    {
        let scheme = &dir[..index];
        if scheme.chars().all(char::is_alphabetic) {
            bail!(
                "data directory {dir:?} looks like a URI ({scheme}://); pass a filesystem path instead"
            );
        }
    }

    if dir.starts_with("file:") {
        bail!("data directory {dir:?} uses file: URI syntax; pass a plain filesystem path");
    }

    Ok(())
}

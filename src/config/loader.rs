//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MigrateError, MigrateResult};

use super::types::{ColorMode, Settings, Verbosity};

/// File name looked up in the working directory
pub const SETTINGS_FILE: &str = "cfgmigrate.toml";

/// Non-fatal settings warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MigrateResult<(Settings, Vec<SettingsWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MigrateError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            SettingsWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Load the explicit file, else `./cfgmigrate.toml`, else defaults; then env overrides.
pub fn load_or_default(
    explicit: Option<&Path>,
) -> MigrateResult<(Settings, Vec<SettingsWarning>)> {
    let (settings, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let local = Path::new(SETTINGS_FILE);
            if local.exists() {
                load_with_warnings(local)?
            } else {
                (Settings::default(), Vec::new())
            }
        }
    };
    Ok((with_env_overrides(settings), warnings))
}

/// Apply environment variable overrides (CFGMIGRATE_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    apply_overrides(settings, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides<F>(mut settings: Settings, var: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    // CFGMIGRATE_VERSION_KEY
    if let Some(key) = var("CFGMIGRATE_VERSION_KEY") {
        let key = key.trim();
        if !key.is_empty() {
            settings.migrate.version_key = key.to_string();
        }
    }

    // CFGMIGRATE_FALLBACK
    if let Some(val) = var("CFGMIGRATE_FALLBACK") {
        settings.migrate.fallback = val.to_lowercase() != "false" && val != "0";
    }

    // CFGMIGRATE_VERBOSITY
    if let Some(verbosity) = var("CFGMIGRATE_VERBOSITY") {
        settings.output.verbosity = Verbosity::parse(&verbosity);
    }

    // NO_COLOR
    if var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        settings.output.color = ColorMode::Never;
    }

    settings
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "migrate",
        "version_key",
        "fallback",
        "verify",
        "output",
        "verbosity",
        "color",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

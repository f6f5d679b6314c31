use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

const LOCAL_CONFIG_FILE: &str = "block_editor.toml";
const CONFIG_DIR_NAME: &str = "s3_block_editor";

const MIN_TEXT_SCALE: f32 = 0.8;
const MAX_TEXT_SCALE: f32 = 1.6;
const MIN_WINDOW_EDGE: f32 = 480.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    pub text_scale: f32,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 720.0,
            window_height: 820.0,
            text_scale: 1.0,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    window_width: Option<f32>,
    window_height: Option<f32>,
    text_scale: Option<f32>,
    log_filter: Option<String>,
}

/// Command-line values that win over file and environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub text_scale: Option<f32>,
    pub log_filter: Option<String>,
}

/// Settings plus the problems met while loading them.
///
/// Logging is configured from the loaded settings, so warnings are collected
/// here and emitted once the subscriber is installed.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

pub fn load_settings(overrides: &Overrides) -> LoadedSettings {
    let mut warnings = Vec::new();
    let mut settings = Settings::default();

    let source = resolve_config_path(overrides.config_path.as_deref(), &mut warnings);
    if let Some(path) = &source {
        match read_file_settings(path) {
            Ok(file_cfg) => settings.apply_file(file_cfg),
            Err(err) => warnings.push(format!("ignoring config file: {err:#}")),
        }
    }

    settings.apply_env(|name| std::env::var(name).ok(), &mut warnings);

    if let Some(scale) = overrides.text_scale {
        settings.text_scale = scale;
    }
    if let Some(filter) = &overrides.log_filter {
        settings.log_filter = filter.clone();
    }

    LoadedSettings {
        settings: settings.clamped(),
        source,
        warnings,
    }
}

fn resolve_config_path(explicit: Option<&Path>, warnings: &mut Vec<String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        warnings.push(format!("config file '{}' does not exist", path.display()));
        return None;
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|base| base.join(CONFIG_DIR_NAME).join("config.toml"))
        .filter(|path| path.is_file())
}

fn read_file_settings(path: &Path) -> anyhow::Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    parse_file_settings(&raw).with_context(|| format!("failed to parse '{}'", path.display()))
}

fn parse_file_settings(raw: &str) -> anyhow::Result<FileSettings> {
    Ok(toml::from_str::<FileSettings>(raw)?)
}

impl Settings {
    fn apply_file(&mut self, file_cfg: FileSettings) {
        if let Some(v) = file_cfg.window_width {
            self.window_width = v;
        }
        if let Some(v) = file_cfg.window_height {
            self.window_height = v;
        }
        if let Some(v) = file_cfg.text_scale {
            self.text_scale = v;
        }
        if let Some(v) = file_cfg.log_filter {
            self.log_filter = v;
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>, warnings: &mut Vec<String>) {
        let mut read_f32 = |name: &str| -> Option<f32> {
            let raw = lookup(name).filter(|v| !v.trim().is_empty())?;
            match raw.trim().parse::<f32>() {
                Ok(value) => Some(value),
                Err(err) => {
                    warnings.push(format!("{name}='{raw}' is not a number: {err}"));
                    None
                }
            }
        };

        if let Some(v) = read_f32("BLOCK_EDITOR__WINDOW_WIDTH") {
            self.window_width = v;
        }
        if let Some(v) = read_f32("BLOCK_EDITOR__WINDOW_HEIGHT") {
            self.window_height = v;
        }
        if let Some(v) = read_f32("BLOCK_EDITOR__TEXT_SCALE") {
            self.text_scale = v;
        }
        if let Some(v) = lookup("BLOCK_EDITOR__LOG_FILTER").filter(|v| !v.trim().is_empty()) {
            self.log_filter = v;
        }
    }

    fn clamped(mut self) -> Self {
        self.text_scale = if self.text_scale.is_finite() {
            self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE)
        } else {
            Settings::default().text_scale
        };
        self.window_width = clamp_edge(self.window_width, Settings::default().window_width);
        self.window_height = clamp_edge(self.window_height, Settings::default().window_height);
        self
    }
}

fn clamp_edge(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.max(MIN_WINDOW_EDGE)
    } else {
        fallback
    }
}

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use shared::protocol::ChatContext;

pub const SETTINGS_FILE: &str = "planner_chat.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub destination: Option<String>,
    pub days: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".into(),
            destination: None,
            days: None,
        }
    }
}

impl Settings {
    pub fn chat_context(&self) -> ChatContext {
        ChatContext::from_page(self.destination.clone(), self.days.clone())
    }
}

/// Defaults, then the settings file, then the environment. An explicitly
/// named file must exist; the default file is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (file, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(SETTINGS_FILE), false),
    };
    match fs::read_to_string(&file) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid settings file '{}'", file.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", file.display()))
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(raw)?;
    if let Some(v) = file_value(&file_cfg, "server_url") {
        settings.server_url = v;
    }
    if let Some(v) = file_value(&file_cfg, "destination") {
        settings.destination = Some(v);
    }
    if let Some(v) = file_value(&file_cfg, "days") {
        settings.days = Some(v);
    }
    Ok(())
}

/// `days = 5` and `days = "5"` are both accepted.
fn file_value(file_cfg: &HashMap<String, toml::Value>, key: &str) -> Option<String> {
    match file_cfg.get(key)? {
        toml::Value::String(v) => Some(v.clone()),
        toml::Value::Integer(v) => Some(v.to_string()),
        toml::Value::Float(v) => Some(v.to_string()),
        _ => None,
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("PLANNER_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = var("PLANNER_DESTINATION") {
        settings.destination = Some(v);
    }
    if let Some(v) = var("APP__DESTINATION") {
        settings.destination = Some(v);
    }

    if let Some(v) = var("PLANNER_DAYS") {
        settings.days = Some(v);
    }
    if let Some(v) = var("APP__DAYS") {
        settings.days = Some(v);
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

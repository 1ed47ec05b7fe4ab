use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "tensor_viz.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub default_dimension: u32,
    pub advisory_threshold: u32,
    pub pick_radius_px: f32,
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_dimension: 2,
            advisory_threshold: 6,
            pick_radius_px: 16.0,
            elevation_deg: 25.0,
            azimuth_deg: -60.0,
            window_width: 1200.0,
            window_height: 900.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    default_dimension: Option<u32>,
    advisory_threshold: Option<u32>,
    pick_radius_px: Option<f32>,
    elevation_deg: Option<f32>,
    azimuth_deg: Option<f32>,
    window_width: Option<f32>,
    window_height: Option<f32>,
}

/// Defaults, then the TOML file (if present), then `APP__*` environment overrides.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    }

    apply_env_with(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file: FileSettings = toml::from_str(raw)?;

    if let Some(v) = file.default_dimension {
        settings.default_dimension = v;
    }
    if let Some(v) = file.advisory_threshold {
        settings.advisory_threshold = v;
    }
    if let Some(v) = file.pick_radius_px {
        settings.pick_radius_px = v;
    }
    if let Some(v) = file.elevation_deg {
        settings.elevation_deg = v;
    }
    if let Some(v) = file.azimuth_deg {
        settings.azimuth_deg = v;
    }
    if let Some(v) = file.window_width {
        settings.window_width = v;
    }
    if let Some(v) = file.window_height {
        settings.window_height = v;
    }

    sanitize(settings);
    Ok(())
}

fn apply_env_with(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = parse_env(&lookup, "APP__DEFAULT_DIMENSION") {
        settings.default_dimension = v;
    }
    if let Some(v) = parse_env(&lookup, "APP__ADVISORY_THRESHOLD") {
        settings.advisory_threshold = v;
    }
    if let Some(v) = parse_env(&lookup, "APP__PICK_RADIUS_PX") {
        settings.pick_radius_px = v;
    }
    if let Some(v) = parse_env(&lookup, "APP__ELEVATION_DEG") {
        settings.elevation_deg = v;
    }
    if let Some(v) = parse_env(&lookup, "APP__AZIMUTH_DEG") {
        settings.azimuth_deg = v;
    }
    if let Some(v) = parse_env(&lookup, "APP__WINDOW_WIDTH") {
        settings.window_width = v;
    }
    if let Some(v) = parse_env(&lookup, "APP__WINDOW_HEIGHT") {
        settings.window_height = v;
    }

    sanitize(settings);
}

fn parse_env<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(variable = name, value = %raw, "ignoring unparsable override");
            None
        }
    }
}

fn sanitize(settings: &mut Settings) {
    let defaults = Settings::default();
    if settings.default_dimension == 0 {
        settings.default_dimension = defaults.default_dimension;
    }
    if !(settings.pick_radius_px.is_finite() && settings.pick_radius_px > 0.0) {
        settings.pick_radius_px = defaults.pick_radius_px;
    }
    settings.elevation_deg = settings.elevation_deg.clamp(-89.0, 89.0);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn file_values_override_defaults() {
        let mut settings = Settings::default();
        apply_file(
            &mut settings,
            "default_dimension = 3\npick_radius_px = 24.0\nazimuth_deg = 30.0\n",
        )
        .expect("parse");
        assert_eq!(settings.default_dimension, 3);
        assert_eq!(settings.pick_radius_px, 24.0);
        assert_eq!(settings.azimuth_deg, 30.0);
        assert_eq!(settings.advisory_threshold, 6);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut settings = Settings::default();
        assert!(apply_file(&mut settings, "bind_addr = \"0.0.0.0\"\n").is_err());
    }

    #[test]
    fn env_overrides_win_and_bad_values_are_skipped() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("APP__ADVISORY_THRESHOLD", "10"),
            ("APP__ELEVATION_DEG", "not-a-number"),
            ("APP__DEFAULT_DIMENSION", "0"),
        ]);
        let mut settings = Settings::default();
        apply_env_with(&mut settings, |name| env.get(name).map(|v| v.to_string()));

        assert_eq!(settings.advisory_threshold, 10);
        assert_eq!(settings.elevation_deg, 25.0);
        assert_eq!(settings.default_dimension, 2);
    }

    #[test]
    fn env_overrides_window_size() {
        let env: HashMap<&str, &str> =
            HashMap::from([("APP__WINDOW_WIDTH", "1600"), ("APP__WINDOW_HEIGHT", "1000.5")]);
        let mut settings = Settings::default();
        apply_env_with(&mut settings, |name| env.get(name).map(|v| v.to_string()));

        assert_eq!(settings.window_width, 1600.0);
        assert_eq!(settings.window_height, 1000.5);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("tensor_viz_missing_settings_file.toml");
        let settings = load_settings(Some(&path)).expect("defaults");
        assert_eq!(settings.pick_radius_px, Settings::default().pick_radius_px);
    }
}

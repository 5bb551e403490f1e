//! Settings layers: loading, merging and persisting
//!
//! Settings come from two flat JSON objects. The default layer ships with the
//! application and is never written; the user layer overrides it key by key
//! and is rewritten in full on every change.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

use super::SettingsError;
use super::theme::{Palette, ThemeStyle};

/// A parsed settings layer
pub type Layer = Map<String, Value>;

/// Defaults compiled into the binary, used when no default file is installed
pub const BUILTIN_DEFAULTS: &str = include_str!("../../assets/default_settings.json");

/// Effective settings (default layer merged with the user layer)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme_style: Option<ThemeStyle>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_palette: Option<Palette>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        serialize_with = "number_as_given",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<f32>,
    /// Keys this version does not know about, kept as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Settings {
    /// Merge two layers (user wins on shared keys) into typed settings.
    ///
    /// User values of the wrong type are dropped before the merge, so the
    /// default value for that key stays in effect.
    pub fn from_layers(defaults: Layer, user: Layer) -> Self {
        let merged = merge_layers(defaults, drop_invalid_keys(user));
        serde_json::from_value(Value::Object(merged)).unwrap_or_else(|e| {
            warn!(error = %e, "settings did not match the expected shape, using empty settings");
            Self::default()
        })
    }

    pub fn effective_theme_style(&self) -> ThemeStyle {
        self.theme_style.unwrap_or_default()
    }

    pub fn effective_palette(&self) -> Palette {
        self.primary_palette.unwrap_or_default()
    }

    /// Write the complete settings as indented JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Key-by-key merge: `user` overrides `defaults`, new keys are added
pub fn merge_layers(defaults: Layer, user: Layer) -> Layer {
    let mut merged = defaults;
    merged.extend(user);
    merged
}

/// Remove known keys whose value does not have the expected type
fn drop_invalid_keys(mut layer: Layer) -> Layer {
    layer.retain(|key, value| {
        let valid = match key.as_str() {
            "theme_style" => fits::<ThemeStyle>(value),
            "primary_palette" => fits::<Palette>(value),
            "font_name" => fits::<String>(value),
            "font_size" => fits::<f32>(value),
            _ => true,
        };
        if !valid {
            warn!(key = %key, %value, "dropping invalid user setting");
        }
        valid
    });
    layer
}

fn fits<T: DeserializeOwned>(value: &Value) -> bool {
    T::deserialize(value).is_ok()
}

/// Parse one layer; anything but a JSON object is an error
pub fn parse_layer(text: &str, origin: &Path) -> Result<Layer, SettingsError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(SettingsError::NotAnObject {
            path: origin.to_path_buf(),
        }),
        Err(source) => Err(SettingsError::Json {
            path: origin.to_path_buf(),
            source,
        }),
    }
}

/// Read a layer from disk.
///
/// A missing file is an empty layer. Unreadable or malformed files are logged
/// and also treated as empty.
pub fn read_layer(path: &Path) -> Layer {
    if !path.exists() {
        return Layer::new();
    }
    let result = fs::read_to_string(path)
        .map_err(SettingsError::from)
        .and_then(|text| parse_layer(&text, path));
    match result {
        Ok(layer) => layer,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring settings file");
            Layer::new()
        }
    }
}

/// Accept a field only when it has the expected type; otherwise drop it
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match T::deserialize(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            warn!(%value, error = %e, "dropping invalid settings value");
            Ok(None)
        }
    }
}

/// Whole sizes are written as integers (`16`), others as given (`12.5`)
fn number_as_given<S>(size: &Option<f32>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match size {
        Some(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e9 => {
            serializer.serialize_i64(*v as i64)
        }
        Some(v) => serializer.serialize_f32(*v),
        None => serializer.serialize_none(),
    }
}

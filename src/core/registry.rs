//! Reference registry of known resource types.
//!
//! Two file shapes are accepted and resolved once at load time:
//!
//! - flat list: `["azurerm_storage_account", "azurerm_virtual_network"]`
//! - titled map: `{ "resources": [{ "name": "azurerm_storage_account", "title": "Storage Account" }] }`

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;

/// Field of the titled-map object that holds the entry array.
pub const TITLED_MAP_FIELD: &str = "resources";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registry {
    FlatList(HashSet<String>),
    TitledMap(HashMap<String, String>),
}

#[derive(Debug, Deserialize)]
struct TitledRegistryFile {
    resources: Vec<TitledEntry>,
}

#[derive(Debug, Deserialize)]
struct TitledEntry {
    #[serde(default)]
    name: Option<String>,
    /// Identifier fallback for dumps that key entries by `type` instead of `name`.
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl TitledEntry {
    /// `name` wins; `type` is only read when `name` is absent.
    fn identifier(self) -> Option<(String, Option<String>)> {
        let name = self.name.or(self.kind)?;
        Some((name, self.title))
    }
}

impl Registry {
    pub fn len(&self) -> usize {
        match self {
            Registry::FlatList(set) => set.len(),
            Registry::TitledMap(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_titled(&self) -> bool {
        matches!(self, Registry::TitledMap(_))
    }

    pub fn contains(&self, resource_type: &str) -> bool {
        match self {
            Registry::FlatList(set) => set.contains(resource_type),
            Registry::TitledMap(map) => map.contains_key(resource_type),
        }
    }

    /// Display title for a known identifier. Always `None` for flat lists.
    pub fn title(&self, resource_type: &str) -> Option<&str> {
        match self {
            Registry::FlatList(_) => None,
            Registry::TitledMap(map) => map.get(resource_type).map(String::as_str),
        }
    }
}

/// Read and parse a registry file. Any failure is fatal for the run.
pub fn load_registry(path: &Path) -> Result<Registry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry file: {}", path.display()))?;
    parse_registry(&content)
        .with_context(|| format!("Failed to load registry file: {}", path.display()))
}

/// Parse registry JSON, detecting the shape from the top-level value.
pub fn parse_registry(content: &str) -> Result<Registry> {
    let value: Value = serde_json::from_str(content).context("Registry is not valid JSON")?;

    match value {
        Value::Array(items) => parse_flat_list(items),
        Value::Object(_) => parse_titled_map(value),
        _ => bail!(
            "Registry file must be a JSON array of strings or an object with a \"{}\" array",
            TITLED_MAP_FIELD
        ),
    }
}

fn parse_flat_list(items: Vec<Value>) -> Result<Registry> {
    let mut set = HashSet::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::String(s) => {
                set.insert(s);
            }
            other => bail!(
                "Registry array must contain only strings, found {} at index {}",
                json_kind(&other),
                index
            ),
        }
    }
    Ok(Registry::FlatList(set))
}

fn parse_titled_map(value: Value) -> Result<Registry> {
    if value.get(TITLED_MAP_FIELD).is_none() {
        bail!(
            "Registry object must contain a \"{}\" array",
            TITLED_MAP_FIELD
        );
    }

    let file: TitledRegistryFile = serde_json::from_value(value).with_context(|| {
        format!(
            "Registry \"{}\" must be an array of objects with \"name\" and \"title\" fields",
            TITLED_MAP_FIELD
        )
    })?;

    let mut map = HashMap::with_capacity(file.resources.len());
    for entry in file.resources {
        let Some((name, title)) = entry.identifier() else {
            continue;
        };
        let title = title.unwrap_or_else(|| name.clone());
        map.entry(name).or_insert(title);
    }
    Ok(Registry::TitledMap(map))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::capability::{to_options, Capability};

const PRODUCT_FIELDS: [&str; 6] = [
    "id",
    "title",
    "description",
    "handle",
    "variant_sku",
    "thumbnail",
];
const SEARCHABLE_ATTRIBUTES: [&str; 3] = ["title", "description", "variant_sku"];
const DISPLAYED_ATTRIBUTES: [&str; 6] = [
    "id",
    "handle",
    "title",
    "description",
    "variant_sku",
    "thumbnail",
];
const FILTERABLE_ATTRIBUTES: [&str; 2] = ["id", "handle"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeilisearchConnection {
    pub host: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSettings {
    pub searchable_attributes: Vec<String>,
    pub displayed_attributes: Vec<String>,
    pub filterable_attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDefinition {
    #[serde(rename = "type")]
    pub index_type: String,
    pub enabled: bool,
    pub fields: Vec<String>,
    pub index_settings: IndexSettings,
    pub primary_key: String,
}

impl IndexDefinition {
    /// Product index schema. Fixed; not derived from the environment.
    pub fn products() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        Self {
            index_type: "products".to_string(),
            enabled: true,
            fields: owned(&PRODUCT_FIELDS),
            index_settings: IndexSettings {
                searchable_attributes: owned(&SEARCHABLE_ATTRIBUTES),
                displayed_attributes: owned(&DISPLAYED_ATTRIBUTES),
                filterable_attributes: owned(&FILTERABLE_ATTRIBUTES),
            },
            primary_key: "id".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeilisearchSettings {
    pub products: IndexDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeilisearchPluginOptions {
    pub config: MeilisearchConnection,
    pub settings: MeilisearchSettings,
}

impl MeilisearchPluginOptions {
    pub fn with_product_index(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            config: MeilisearchConnection {
                host: host.into(),
                api_key: api_key.into(),
            },
            settings: MeilisearchSettings {
                products: IndexDefinition::products(),
            },
        }
    }
}

/// A plugin entry. Plugins are listed separately from modules.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginDescriptor {
    Meilisearch(MeilisearchPluginOptions),
}

impl PluginDescriptor {
    pub fn capability(&self) -> Capability {
        match self {
            PluginDescriptor::Meilisearch(_) => Capability::Search,
        }
    }

    pub fn resolve(&self) -> &'static str {
        match self {
            PluginDescriptor::Meilisearch(_) => "@rokmohar/medusa-plugin-meilisearch",
        }
    }

    pub fn options(&self) -> Map<String, Value> {
        match self {
            PluginDescriptor::Meilisearch(o) => to_options(o),
        }
    }
}

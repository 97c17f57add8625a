use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// Base path shared by the filter and lookup endpoints
pub const DEFAULT_API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Arrabiata, Chicken Biryani, Tandoori Chicken, Pancakes, Apple Pie
pub const DEFAULT_POPULAR_IDS: [&str; 5] = ["52771", "52805", "52806", "52854", "52856"];

/// Runtime configuration for the browser
#[derive(Debug, Deserialize, Clone)]
pub struct BrowserConfig {
    /// Base URL of the recipe service
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Recipe identifiers shown in the popular section, in display order
    #[serde(default = "default_popular_ids", deserialize_with = "deserialize_ids")]
    pub popular_ids: Vec<String>,
    /// Request timeout in seconds; unset means the transport default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            popular_ids: default_popular_ids(),
            timeout_secs: None,
        }
    }
}

/// Environment parsing turns a lone numeric id into an integer, so ids may
/// arrive as a single scalar or as a list of strings and numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeId {
    Text(String),
    Number(u64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeIds {
    One(RecipeId),
    Many(Vec<RecipeId>),
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        match id {
            RecipeId::Text(text) => text,
            RecipeId::Number(number) => number.to_string(),
        }
    }
}

fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RecipeIds::deserialize(deserializer)? {
        RecipeIds::One(id) => vec![id.into()],
        RecipeIds::Many(ids) => ids.into_iter().map(String::from).collect(),
    })
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_popular_ids() -> Vec<String> {
    DEFAULT_POPULAR_IDS.iter().map(|id| id.to_string()).collect()
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. mealdb.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__API_BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("mealdb").required(false))
            .add_source(
                Environment::with_prefix("MEALDB")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("popular_ids")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

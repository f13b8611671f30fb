use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Search keywords for one supported prefecture, in search order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefectureCategories {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Prefecture → keyword mapping plus the fixed keyword list used when
/// searching all areas. Keyword order is the order results are returned in.
///
/// A keyword may appear only once per list, so each category is searched
/// once per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub prefectures: Vec<PrefectureCategories>,
    pub all_areas: Vec<String>,
}

impl CategoryTable {
    /// Builds and validates a table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] on blank or duplicate names or
    /// keywords, or on empty keyword lists.
    pub fn new(
        prefectures: Vec<PrefectureCategories>,
        all_areas: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let table = Self {
            prefectures,
            all_areas,
        };
        validate_categories(&table)?;
        Ok(table)
    }

    /// Keywords configured for `prefecture`, or `None` when it is unsupported.
    #[must_use]
    pub fn keywords_for(&self, prefecture: &str) -> Option<&[String]> {
        self.prefectures
            .iter()
            .find(|p| p.name == prefecture)
            .map(|p| p.keywords.as_slice())
    }

    #[must_use]
    pub fn is_supported(&self, prefecture: &str) -> bool {
        self.keywords_for(prefecture).is_some()
    }

    #[must_use]
    pub fn all_areas(&self) -> &[String] {
        &self.all_areas
    }
}

/// Load and validate the category table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_categories(path: &Path) -> Result<CategoryTable, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CategoriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_categories(&content)
}

fn parse_categories(content: &str) -> Result<CategoryTable, ConfigError> {
    let table: CategoryTable =
        serde_yaml::from_str(content).map_err(ConfigError::CategoriesFileParse)?;
    validate_categories(&table)?;
    Ok(table)
}

fn validate_categories(table: &CategoryTable) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for prefecture in &table.prefectures {
        if prefecture.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "prefecture name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(prefecture.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate prefecture: '{}'",
                prefecture.name
            )));
        }

        validate_keywords(&prefecture.name, &prefecture.keywords)?;
    }

    validate_keywords("all_areas", &table.all_areas)
}

fn validate_keywords(owner: &str, keywords: &[String]) -> Result<(), ConfigError> {
    if keywords.is_empty() {
        return Err(ConfigError::Validation(format!(
            "'{owner}' must list at least one keyword"
        )));
    }

    let mut seen = HashSet::new();
    for keyword in keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "'{owner}' contains a blank keyword"
            )));
        }
        if !seen.insert(keyword.as_str()) {
            return Err(ConfigError::Validation(format!(
                "'{owner}' lists keyword '{keyword}' more than once"
            )));
        }
    }

    Ok(())
}

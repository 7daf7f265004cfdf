//! Bar catalog consumed by the theming collaborator.
//!
//! The session only stores a bar id; nothing in the core inspects a palette.
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const DEFAULT_BAR_DATA: &str = include_str!("../../drinkdraw-web/static/assets/data/bars.json");

/// HSL triplets (`"45 90% 55%"`) applied as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarTheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub card_bg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Asset path relative to the site root.
    #[serde(default)]
    pub logo: Option<String>,
    pub theme: BarTheme,
    /// House menu; informational only, never fed into the draw.
    #[serde(default)]
    pub drinks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BarCatalog {
    #[serde(default)]
    pub bars: Vec<Bar>,
}

impl BarCatalog {
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_BAR_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_catalog() -> &'static Self {
        static CATALOG: OnceLock<BarCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::load_from_static)
    }

    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a bar catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Bar> {
        self.bars.iter().find(|bar| bar.id == id)
    }

    /// First entry; the setup form preselects it.
    #[must_use]
    pub fn default_bar(&self) -> Option<&Bar> {
        self.bars.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_catalog_parses() {
        let catalog = BarCatalog::from_json(DEFAULT_BAR_DATA).expect("bars.json parses");
        assert!(!catalog.bars.is_empty());
        assert_eq!(BarCatalog::default_catalog(), &catalog);
    }

    #[test]
    fn lookup_by_id_and_default() {
        let catalog = BarCatalog::default_catalog();
        let first = catalog.default_bar().expect("at least one bar");
        assert_eq!(catalog.get(&first.id), Some(first));
        assert!(catalog.get("no-such-bar").is_none());
        assert_eq!(catalog.iter().count(), catalog.bars.len());
    }

    #[test]
    fn logo_and_menu_are_optional() {
        let catalog = BarCatalog::from_json(
            r#"{"bars":[{"id":"x","name":"X","theme":{"primary":"0 0% 0%","secondary":"0 0% 0%","accent":"0 0% 0%","background":"0 0% 0%","cardBg":"0 0% 0%"}}]}"#,
        )
        .unwrap();
        let bar = catalog.get("x").unwrap();
        assert!(bar.logo.is_none());
        assert!(bar.drinks.is_empty());
        assert_eq!(bar.theme.card_bg, "0 0% 0%");
    }
}

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub default_colors: Vec<String>,
}

/// Items buyers can pick from the form, keyed by item name. An entry without
/// a body (`Cap:` in the items file) is an item without preset colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Option<CatalogItem>>")]
pub struct Catalog {
    items: BTreeMap<String, CatalogItem>,
}

impl From<BTreeMap<String, Option<CatalogItem>>> for Catalog {
    fn from(raw: BTreeMap<String, Option<CatalogItem>>) -> Self {
        Self {
            items: raw
                .into_iter()
                .map(|(name, item)| (name, item.unwrap_or_default()))
                .collect(),
        }
    }
}

impl Catalog {
    pub fn new(items: impl IntoIterator<Item = (String, CatalogItem)>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogItem)> {
        self.items.iter().map(|(name, item)| (name.as_str(), item))
    }
}

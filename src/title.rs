//! Page heading shown above the search bar

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::defaults;
use crate::error::Result;
use crate::store::{ConfigKey, ConfigStore, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PageTitle {
    fn default() -> Self {
        Self(defaults::TITLE.to_string())
    }
}

impl Record for PageTitle {
    const KEY: ConfigKey = ConfigKey::Title;
}

/// Working copy of the title, written through on every edit
#[derive(Debug)]
pub struct TitleModel {
    store: ConfigStore,
    title: PageTitle,
}

impl TitleModel {
    pub fn hydrate(store: ConfigStore) -> Self {
        let title = store.load_or_default::<PageTitle>();
        Self { store, title }
    }

    pub fn get(&self) -> &str {
        self.title.as_str()
    }

    /// Any string is accepted, including an empty one
    pub fn set(&mut self, title: impl Into<String>) -> Result<&str> {
        let next = PageTitle::new(title);
        self.store.save(&next)?;
        info!(title = %next.as_str(), "Updated page title");
        self.title = next;
        Ok(self.title.as_str())
    }

    pub fn reset(&mut self) -> Result<&str> {
        self.title = self.store.reset::<PageTitle>()?;
        Ok(self.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_to_firefox() {
        let dir = TempDir::new().unwrap();
        let model = TitleModel::hydrate(ConfigStore::open(dir.path()));
        assert_eq!(model.get(), "Firefox");
    }

    #[test]
    fn test_set_is_written_through() {
        let dir = TempDir::new().unwrap();
        let mut model = TitleModel::hydrate(ConfigStore::open(dir.path()));
        assert_eq!(model.set("Workbench").unwrap(), "Workbench");

        let reloaded = TitleModel::hydrate(ConfigStore::open(dir.path()));
        assert_eq!(reloaded.get(), "Workbench");
    }

    #[test]
    fn test_reset_restores_default() {
        let dir = TempDir::new().unwrap();
        let mut model = TitleModel::hydrate(ConfigStore::open(dir.path()));
        model.set("").unwrap();
        assert_eq!(model.get(), "");
        assert_eq!(model.reset().unwrap(), "Firefox");
        assert_eq!(
            TitleModel::hydrate(ConfigStore::open(dir.path())).get(),
            "Firefox"
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&PageTitle::new("Gears")).unwrap();
        assert_eq!(json, "\"Gears\"");
    }
}

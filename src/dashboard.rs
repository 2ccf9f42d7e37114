//! Session state for one new-tab page
//!
//! Hydrates every model from a single store at startup. There is no
//! teardown step: every mutation is already durable when it returns.

use serde::Serialize;
use tracing::info;

use crate::links::{LinkSlot, LinkSlotModel};
use crate::store::ConfigStore;
use crate::theme::{ThemeConfig, ThemeModel};
use crate::title::TitleModel;

#[derive(Debug)]
pub struct Dashboard {
    pub title: TitleModel,
    pub links: LinkSlotModel,
    pub theme: ThemeModel,
}

/// Read-only view of the whole page, for presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub title: &'a str,
    pub links: &'a [LinkSlot],
    pub theme: &'a ThemeConfig,
}

impl Dashboard {
    pub fn load(store: ConfigStore) -> Self {
        info!(path = %store.root().display(), "Loading dashboard state");
        Self {
            title: TitleModel::hydrate(store.clone()),
            links: LinkSlotModel::hydrate(store.clone()),
            theme: ThemeModel::hydrate(store),
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot<'_> {
        DashboardSnapshot {
            title: self.title.get(),
            links: self.links.get_all(),
            theme: self.theme.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ConfigKey;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fresh_dashboard_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let dashboard = Dashboard::load(ConfigStore::open(dir.path()));
        let snapshot = dashboard.snapshot();
        assert_eq!(snapshot.title, "Firefox");
        assert_eq!(snapshot.links.len(), 8);
        assert_eq!(snapshot.theme, &ThemeConfig::default());
    }

    #[test]
    fn test_records_load_independently() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::open(dir.path());
        {
            let mut dashboard = Dashboard::load(store.clone());
            dashboard.title.set("Engine Room").unwrap();
            dashboard.links.update(2, "https://x.org", "", "X").unwrap();
            dashboard.theme.set_accent_color("#c0ffee").unwrap();
        }

        // One corrupt record must not take the others down with it
        fs::write(store.path_for(ConfigKey::Links), "garbage").unwrap();

        let dashboard = Dashboard::load(store);
        assert_eq!(dashboard.title.get(), "Engine Room");
        assert!(dashboard.links.get(2).unwrap().is_empty());
        assert_eq!(dashboard.theme.get().accent_color, "#c0ffee");
    }

    #[test]
    fn test_snapshot_serializes() {
        let dir = TempDir::new().unwrap();
        let dashboard = Dashboard::load(ConfigStore::open(dir.path()));
        let value = serde_json::to_value(dashboard.snapshot()).unwrap();
        assert_eq!(value["title"], "Firefox");
        assert_eq!(value["links"].as_array().unwrap().len(), 8);
        assert_eq!(value["theme"]["mainColor"], "#2d2519");
    }
}

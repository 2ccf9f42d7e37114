//! Shortcut link slots
//!
//! The page has exactly eight slots. A slot's index is its identity: slots are
//! edited or cleared in place and never reordered or resized.

use serde::{Deserialize, Serialize};
use tracing::{error, info};
use url::Url;

use crate::constants::defaults::LINK_SLOT_COUNT;
use crate::constants::web;
use crate::error::{Error, Result};
use crate::store::{ConfigKey, ConfigStore, Record};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSlot {
    pub url: String,
    /// Icon URL or embedded image; empty means "derive from the url"
    pub icon: String,
    pub name: String,
}

impl LinkSlot {
    pub fn new(url: impl Into<String>, icon: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            icon: icon.into(),
            name: name.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_empty() && self.icon.is_empty() && self.name.is_empty()
    }

    /// Icon to draw: the explicit icon, else the favicon of the url's host
    pub fn display_icon(&self) -> Option<String> {
        if !self.icon.is_empty() {
            return Some(self.icon.clone());
        }
        if self.url.is_empty() {
            return None;
        }
        let parsed = Url::parse(&normalize_url(&self.url)).ok()?;
        let host = parsed.host_str()?;
        Url::parse_with_params(
            web::FAVICON_SERVICE,
            &[("domain", host), ("sz", web::FAVICON_SIZE)],
        )
        .ok()
        .map(String::from)
    }
}

/// All eight slots; (de)serialized as a JSON array of exactly eight objects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkSlots([LinkSlot; LINK_SLOT_COUNT]);

impl LinkSlots {
    pub fn as_slice(&self) -> &[LinkSlot] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkSlot> {
        self.0.iter()
    }
}

impl Record for LinkSlots {
    const KEY: ConfigKey = ConfigKey::Links;
}

/// Working copy of the slots, written through on every edit
#[derive(Debug)]
pub struct LinkSlotModel {
    store: ConfigStore,
    slots: LinkSlots,
}

impl LinkSlotModel {
    pub fn hydrate(store: ConfigStore) -> Self {
        let slots = store.load_or_default::<LinkSlots>();
        Self { store, slots }
    }

    pub fn get_all(&self) -> &[LinkSlot] {
        self.slots.as_slice()
    }

    pub fn get(&self, index: usize) -> Result<&LinkSlot> {
        check_index(index)?;
        Ok(&self.slots.0[index])
    }

    /// Replace the slot at `index`. No url/icon syntax checks happen here.
    pub fn update(
        &mut self,
        index: usize,
        url: impl Into<String>,
        icon: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<&LinkSlot> {
        check_index(index)?;

        let mut next = self.slots.clone();
        next.0[index] = LinkSlot::new(url, icon, name);
        self.store.save(&next)?;
        self.slots = next;

        let slot = &self.slots.0[index];
        info!(index, url = %slot.url, name = %slot.name, "Updated link slot");
        Ok(slot)
    }

    pub fn clear(&mut self, index: usize) -> Result<&LinkSlot> {
        self.update(index, "", "", "")
    }
}

fn check_index(index: usize) -> Result<()> {
    if index >= LINK_SLOT_COUNT {
        error!(index, len = LINK_SLOT_COUNT, "Link slot index out of range");
        return Err(Error::IndexOutOfRange {
            index,
            len: LINK_SLOT_COUNT,
        });
    }
    Ok(())
}

/// Prefix bare domains ("example.com") with `https://`
pub fn normalize_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw.contains("://") || raw.starts_with("about:") || raw.starts_with("mailto:") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Search-engine URL for a query typed into the search bar
pub fn search_url(query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }
    Url::parse_with_params(web::SEARCH_ENDPOINT, &[("q", query)])
        .ok()
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn model(dir: &TempDir) -> LinkSlotModel {
        LinkSlotModel::hydrate(ConfigStore::open(dir.path()))
    }

    #[test]
    fn test_defaults_are_eight_empty_slots() {
        let dir = TempDir::new().unwrap();
        let links = model(&dir);
        assert_eq!(links.get_all().len(), 8);
        assert!(links.get_all().iter().all(LinkSlot::is_empty));
    }

    #[test]
    fn test_update_replaces_only_target_slot() {
        let dir = TempDir::new().unwrap();
        let mut links = model(&dir);
        let before = links.get_all().to_vec();

        links.update(3, "https://a.com", "", "A").unwrap();

        assert_eq!(links.get_all()[3], LinkSlot::new("https://a.com", "", "A"));
        for (i, slot) in links.get_all().iter().enumerate() {
            if i != 3 {
                assert_eq!(slot, &before[i]);
            }
        }
    }

    #[test]
    fn test_update_is_written_through() {
        let dir = TempDir::new().unwrap();
        let mut links = model(&dir);
        links.update(0, "https://rust-lang.org", "", "Rust").unwrap();
        links.update(7, "https://docs.rs", "https://docs.rs/favicon.ico", "Docs").unwrap();

        let reloaded = model(&dir);
        assert_eq!(reloaded.get_all(), links.get_all());
        assert_eq!(reloaded.get(7).unwrap().icon, "https://docs.rs/favicon.ico");
    }

    #[test]
    fn test_clear_empties_slot() {
        let dir = TempDir::new().unwrap();
        let mut links = model(&dir);
        links.update(5, "https://b.com", "x.png", "B").unwrap();
        assert!(links.clear(5).unwrap().is_empty());
        assert!(model(&dir).get(5).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_leaves_slots_untouched() {
        let dir = TempDir::new().unwrap();
        let mut links = model(&dir);
        links.update(1, "https://c.com", "", "C").unwrap();
        let before = links.get_all().to_vec();

        let err = links.update(8, "https://d.com", "", "D").unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 8, len: 8 }));
        assert!(matches!(links.clear(100), Err(Error::IndexOutOfRange { .. })));
        assert!(links.get(8).is_err());

        assert_eq!(links.get_all(), before.as_slice());
        assert_eq!(model(&dir).get_all(), before.as_slice());
    }

    #[test]
    fn test_wrong_length_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::open(dir.path());
        let seven = vec![LinkSlot::new("https://e.com", "", "E"); 7];
        fs::write(
            store.path_for(ConfigKey::Links),
            serde_json::json!({ "version": 1, "value": seven }).to_string(),
        )
        .unwrap();

        assert!(store.load::<LinkSlots>().is_err());
        let links = LinkSlotModel::hydrate(store);
        assert_eq!(links.get_all(), LinkSlots::default().as_slice());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let slot: LinkSlot = serde_json::from_str(r#"{"url": "https://f.com"}"#).unwrap();
        assert_eq!(slot, LinkSlot::new("https://f.com", "", ""));
    }

    #[test]
    fn test_display_icon() {
        assert_eq!(LinkSlot::default().display_icon(), None);
        assert_eq!(
            LinkSlot::new("https://a.com", "data:image/png;base64,AA==", "").display_icon(),
            Some("data:image/png;base64,AA==".to_string())
        );
        assert_eq!(
            LinkSlot::new("https://www.example.com/path?x=1", "", "").display_icon(),
            Some("https://www.google.com/s2/favicons?domain=www.example.com&sz=64".to_string())
        );
        assert_eq!(
            LinkSlot::new("example.org", "", "").display_icon(),
            Some("https://www.google.com/s2/favicons?domain=example.org&sz=64".to_string())
        );
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("  example.com/a "), "https://example.com/a");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("about:config"), "about:config");
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn test_search_url() {
        assert_eq!(search_url(""), None);
        assert_eq!(
            search_url("rust gears").as_deref(),
            Some("https://www.google.com/search?q=rust+gears")
        );
        assert_eq!(
            search_url("a&b").as_deref(),
            Some("https://www.google.com/search?q=a%26b")
        );
    }
}

//! Custom theme: two colors and an optional background image
//!
//! The background is either a remote URL or an embedded `data:` payload. The
//! model stores both the same way; the only place it tells them apart is
//! when an empty URL entry arrives while an embedded image is active.

use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{defaults, web};
use crate::error::{Error, Result};
use crate::store::{ConfigKey, ConfigStore, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub main_color: String,
    pub accent_color: String,
    pub bg_image: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            main_color: defaults::MAIN_COLOR.to_string(),
            accent_color: defaults::ACCENT_COLOR.to_string(),
            bg_image: String::new(),
        }
    }
}

impl Record for ThemeConfig {
    const KEY: ConfigKey = ConfigKey::Theme;
}

impl ThemeConfig {
    pub fn has_embedded_image(&self) -> bool {
        is_embedded_image(&self.bg_image)
    }

    /// What a URL text field should echo: embedded payloads show as empty
    pub fn url_field_text(&self) -> &str {
        if self.has_embedded_image() {
            ""
        } else {
            &self.bg_image
        }
    }
}

pub fn is_embedded_image(source: &str) -> bool {
    source.starts_with(web::DATA_URL_PREFIX)
}

/// Read an image file into a `data:<mime>;base64,...` payload
pub fn embed_image_file(path: &Path) -> Result<String> {
    let mime = image_mime_type(path)?;
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), mime, "Embedding image file");
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

fn image_mime_type(path: &Path) -> Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "gif" => Ok("image/gif"),
        "webp" => Ok("image/webp"),
        "svg" => Ok("image/svg+xml"),
        "bmp" => Ok("image/bmp"),
        "avif" => Ok("image/avif"),
        "ico" => Ok("image/x-icon"),
        _ => Err(Error::invalid(
            "path",
            format!("{} is not a recognised image file", path.display()),
        )),
    }
}

/// Working copy of the theme; every setter writes a whole new record
#[derive(Debug)]
pub struct ThemeModel {
    store: ConfigStore,
    theme: ThemeConfig,
}

impl ThemeModel {
    pub fn hydrate(store: ConfigStore) -> Self {
        let theme = store.load_or_default::<ThemeConfig>();
        Self { store, theme }
    }

    pub fn get(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn set_main_color(&mut self, color: impl Into<String>) -> Result<&ThemeConfig> {
        let next = ThemeConfig {
            main_color: color.into(),
            ..self.theme.clone()
        };
        self.replace(next)
    }

    pub fn set_accent_color(&mut self, color: impl Into<String>) -> Result<&ThemeConfig> {
        let next = ThemeConfig {
            accent_color: color.into(),
            ..self.theme.clone()
        };
        self.replace(next)
    }

    /// Set the background from a URL entry or an embedded payload.
    ///
    /// An empty entry while an embedded image is active is ignored: the URL
    /// field never echoes embedded data, so an empty field is not a request
    /// to clear. Use [`ThemeModel::clear_background_image`] for that.
    pub fn set_background_image(&mut self, source: impl Into<String>) -> Result<&ThemeConfig> {
        let source = source.into();
        if source.is_empty() && self.theme.has_embedded_image() {
            debug!("Ignoring empty background URL while an embedded image is set");
            return Ok(&self.theme);
        }
        let next = ThemeConfig {
            bg_image: source,
            ..self.theme.clone()
        };
        self.replace(next)
    }

    pub fn clear_background_image(&mut self) -> Result<&ThemeConfig> {
        let next = ThemeConfig {
            bg_image: String::new(),
            ..self.theme.clone()
        };
        self.replace(next)
    }

    /// Embed an image file as the background
    pub fn set_background_from_file(&mut self, path: &Path) -> Result<&ThemeConfig> {
        let payload = embed_image_file(path)?;
        self.set_background_image(payload)
    }

    pub fn reset_to_default(&mut self) -> Result<&ThemeConfig> {
        self.theme = self.store.reset::<ThemeConfig>()?;
        Ok(&self.theme)
    }

    fn replace(&mut self, next: ThemeConfig) -> Result<&ThemeConfig> {
        self.store.save(&next)?;
        self.theme = next;
        info!(
            main_color = %self.theme.main_color,
            accent_color = %self.theme.accent_color,
            embedded_bg = self.theme.has_embedded_image(),
            "Updated theme"
        );
        Ok(&self.theme)
    }
}

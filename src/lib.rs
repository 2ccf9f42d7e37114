//! Core of a steampunk new-tab page: gear and clock geometry plus the
//! persisted title, shortcut links and theme that drive what gets drawn.
//!
//! The core never renders anything itself. A presentation layer reads plain
//! data from [`geometry`] on each tick and from the models in [`dashboard`],
//! and feeds user edits back through the model mutators, which write through
//! to the [`store`] before returning.

#![forbid(unsafe_code)]

pub mod constants;
pub mod dashboard;
pub mod error;
pub mod geometry;
pub mod links;
pub mod store;
pub mod svg;
pub mod theme;
pub mod title;

pub use dashboard::{Dashboard, DashboardSnapshot};
pub use error::{Error, Result};
pub use links::{LinkSlot, LinkSlotModel};
pub use store::{ConfigKey, ConfigStore, Record};
pub use theme::{ThemeConfig, ThemeModel};
pub use title::{PageTitle, TitleModel};

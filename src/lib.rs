//! Interactive widgets for the Thqaf site pages.
//!
//! - [`config`]: page configuration (element ids, classes, timings)
//! - [`widgets`]: DOM-free controllers and the click/key router
//! - [`web`]: the wasm binding that attaches them to a live page

pub use thqaf_config as config;
pub use thqaf_web as web;
pub use thqaf_widgets as widgets;

pub use thqaf_config::SiteConfig;
pub use thqaf_widgets::{PageRouter, RecordingSurface, Surface};

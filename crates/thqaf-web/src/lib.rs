//! Browser entry point for the site widgets.
//!
//! Resolves the page once, builds the controllers from `thqaf-widgets`, and
//! wires DOM events to them. Boot runs at most once per page, whether it is
//! triggered by the wasm start hook or by a host calling [`init`].

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use thqaf_config::{ConfigError, SiteConfig};
use thqaf_widgets::PageRouter;
use thqaf_widgets::elements::{ContactForm, LiveClock, LoginModal, MobileMenu};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub mod classify;
pub mod clock;
pub mod contact;
pub mod dom;
pub mod error;
pub mod events;
pub mod landing;
pub mod logging;
pub mod surface;

use crate::clock::ClockBinding;
use crate::dom::PageNodes;
pub use crate::error::{Result, WebError};

/// Element holding an optional TOML configuration for the page.
pub const CONFIG_ELEMENT_ID: &str = "thqaf-config";

thread_local! {
    static APP: OnceCell<App> = const { OnceCell::new() };
}

/// Live bindings for the page lifetime.
struct App {
    _clock: Option<ClockBinding>,
}

impl App {
    fn bind(window: &Window, document: &Document, config: &SiteConfig) -> Result<Self> {
        let (nodes, dropdowns) = PageNodes::bind(document, config)?;
        let nodes = Rc::new(nodes);

        let router = PageRouter::new(
            dropdowns,
            nodes
                .menu
                .as_ref()
                .map(|_| MobileMenu::new(&config.mobile_menu)),
            nodes.modal.as_ref().map(|_| LoginModal::new(&config.modal)),
        );
        events::bind_router(document, nodes.clone(), Rc::new(RefCell::new(router)))?;

        let mut live_clock = LiveClock::new(&config.clock);
        let clock = clock::bind_clock(window, nodes.clone(), &mut live_clock)?;

        let form = Rc::new(RefCell::new(ContactForm::new(&config.contact)));
        contact::bind_contact(nodes.clone(), form)?;

        landing::bind_counters(window, nodes.clone(), &config.landing)?;
        landing::bind_faq(nodes.clone())?;

        debug!(
            dropdowns = nodes.dropdowns.len(),
            menu = nodes.menu.is_some(),
            modal = nodes.modal.is_some(),
            counters = nodes.counters.len(),
            faq = nodes.disclosures.len(),
            "page bound"
        );
        Ok(Self { _clock: clock })
    }
}

/// Read the inline configuration, falling back to defaults.
fn load_config(document: &Document) -> (SiteConfig, Option<ConfigError>) {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return (SiteConfig::default(), None);
    };
    match SiteConfig::from_toml_str(&text) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    }
}

fn boot() -> Result<()> {
    if APP.with(|app| app.get().is_some()) {
        debug!("widgets already bound");
        return Ok(());
    }

    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    let (config, config_error) = load_config(&document);
    logging::install(config.logging.level);
    if let Some(err) = config_error {
        warn!(%err, "invalid page configuration, using defaults");
    }

    let app = App::bind(&window, &document, &config)?;
    APP.with(|cell| {
        let _ = cell.set(app);
    });
    info!("site widgets ready");
    Ok(())
}

/// Bind the widgets to the current page. Safe to call more than once.
#[wasm_bindgen]
pub fn init() -> std::result::Result<(), JsValue> {
    boot().map_err(JsValue::from)
}

/// Runs when the module is instantiated; defers to `DOMContentLoaded` while
/// the document is still loading.
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .ok_or(WebError::NoWindow)?
        .document()
        .ok_or(WebError::NoDocument)?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(|| {
            if let Err(err) = boot() {
                warn!(%err, "failed to bind widgets");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }
    init()
}

//! Element lookup. Everything the widgets touch is resolved once at boot.

use std::fmt;

use thqaf_config::SiteConfig;
use thqaf_widgets::elements::{DropdownManager, DropdownNodes, DropdownParts};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDetailsElement, HtmlElement};

use crate::error::{Result, WebError};
use crate::surface::ARIA_HIDDEN;

#[derive(Debug, Clone)]
pub struct MenuNodes<N = Element> {
    pub toggle: N,
    pub panel: N,
    pub overlay: N,
}

#[derive(Debug, Clone)]
pub struct ModalNodes<N = Element> {
    pub root: N,
    pub opener: N,
    pub close: Option<N>,
    pub cancel: Option<N>,
    pub submit: Option<N>,
    pub first_field: Option<N>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactNodes {
    pub message: Option<Element>,
    pub count: Option<Element>,
    pub send_button: Option<Element>,
    pub form: Option<Element>,
}

/// Every element the widgets read or write, resolved from [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct PageNodes {
    pub body: HtmlElement,
    pub clock: Option<Element>,
    pub dropdowns: Vec<DropdownNodes<Element>>,
    pub menu: Option<MenuNodes>,
    pub modal: Option<ModalNodes>,
    pub contact: ContactNodes,
    pub counters: Vec<Element>,
    pub disclosures: Vec<HtmlDetailsElement>,
}

impl PageNodes {
    /// Resolve the page. Also returns the dropdown manager, whose handles
    /// index `dropdowns`.
    ///
    /// Only a missing `<body>` is fatal. A selector the browser rejects
    /// leaves that widget out and the rest of the page is still bound.
    pub fn bind(document: &Document, config: &SiteConfig) -> Result<(Self, DropdownManager)> {
        let body = document.body().ok_or(WebError::NoBody)?;

        let dropdown = &config.dropdown;
        let dropdown_parts = select_all(document, &dropdown.container_selector)
            .into_iter()
            .map(|container| DropdownParts {
                toggle: or_absent(
                    container.query_selector(&dropdown.toggle_selector),
                    &dropdown.toggle_selector,
                ),
                panel: or_absent(
                    container.query_selector(&dropdown.panel_selector),
                    &dropdown.panel_selector,
                ),
                container,
            });
        let (dropdown_manager, dropdowns) =
            DropdownManager::from_parts(dropdown_parts, dropdown.open_class.clone());

        let menu = match (
            document.get_element_by_id(&config.mobile_menu.toggle_id),
            document.get_element_by_id(&config.mobile_menu.panel_id),
        ) {
            (Some(toggle), Some(panel)) => {
                match ensure_overlay(document, &body, &config.mobile_menu.overlay_class) {
                    Ok(overlay) => Some(MenuNodes {
                        toggle,
                        panel,
                        overlay,
                    }),
                    Err(err) => {
                        warn!(%err, "mobile menu overlay unavailable");
                        None
                    }
                }
            }
            _ => {
                debug!("mobile menu not present");
                None
            }
        };

        let modal = match (
            document.get_element_by_id(&config.modal.root_id),
            document.get_element_by_id(&config.modal.open_id),
        ) {
            (Some(root), Some(opener)) => Some(ModalNodes {
                root,
                opener,
                close: document.get_element_by_id(&config.modal.close_id),
                cancel: document.get_element_by_id(&config.modal.cancel_id),
                submit: document.get_element_by_id(&config.modal.submit_id),
                first_field: document.get_element_by_id(&config.modal.first_field_id),
            }),
            _ => {
                debug!("login modal not present");
                None
            }
        };

        let contact = ContactNodes {
            message: select_one(document, &config.contact.message_selector),
            count: document.get_element_by_id(&config.contact.count_id),
            send_button: document.get_element_by_id(&config.contact.send_button_id),
            form: select_one(document, &config.contact.form_selector),
        };

        let disclosures = select_all(document, &config.landing.faq_selector)
            .into_iter()
            .filter_map(|element| element.dyn_into::<HtmlDetailsElement>().ok())
            .collect();

        let nodes = Self {
            body,
            clock: document.get_element_by_id(&config.clock.element_id),
            dropdowns,
            menu,
            modal,
            contact,
            counters: select_all(document, &config.landing.counter_selector),
            disclosures,
        };
        Ok((nodes, dropdown_manager))
    }

    /// Index of `element` among the counters.
    pub fn counter_index(&self, element: &Element) -> Option<usize> {
        self.counters
            .iter()
            .position(|counter| counter.is_same_node(Some(element.as_ref())))
    }
}

/// Treat a failed lookup as "not on this page".
pub fn or_absent<T: Default, E: fmt::Debug>(result: std::result::Result<T, E>, selector: &str) -> T {
    match result {
        Ok(found) => found,
        Err(err) => {
            warn!(selector, ?err, "selector rejected, widget skipped");
            T::default()
        }
    }
}

fn select_one(document: &Document, selector: &str) -> Option<Element> {
    or_absent(document.query_selector(selector), selector)
}

fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    or_absent(query_all(document, selector), selector)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Reuse the menu overlay if the page (or an earlier boot) already has one,
/// otherwise append a hidden one to `<body>`.
pub fn ensure_overlay(document: &Document, body: &HtmlElement, class: &str) -> Result<Element> {
    if let Some(existing) = document.query_selector(&format!(".{class}"))? {
        return Ok(existing);
    }
    let overlay = document.create_element("div")?;
    overlay.set_class_name(class);
    overlay.set_attribute(ARIA_HIDDEN, "true")?;
    body.append_child(&overlay)?;
    debug!(class, "menu overlay created");
    Ok(overlay)
}

/// Current value of a text field, whether it is a `<textarea>` or an `<input>`.
pub fn field_value(element: &Element) -> Option<String> {
    if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return Some(area.value());
    }
    element
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(web_sys::HtmlInputElement::value)
}

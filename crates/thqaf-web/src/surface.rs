//! [`Surface`] over the live DOM.

use thqaf_widgets::{NodeRef, Surface};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::dom::PageNodes;

pub use thqaf_widgets::surface::{ARIA_EXPANDED, ARIA_HIDDEN};

pub struct DomSurface<'a> {
    nodes: &'a PageNodes,
}

impl<'a> DomSurface<'a> {
    pub fn new(nodes: &'a PageNodes) -> Self {
        Self { nodes }
    }

    fn element(&self, node: NodeRef) -> Option<&'a Element> {
        let nodes = self.nodes;
        match node {
            NodeRef::DropdownContainer(handle) => {
                nodes.dropdowns.get(handle.index()).map(|d| &d.container)
            }
            NodeRef::DropdownToggle(handle) => nodes.dropdowns.get(handle.index()).map(|d| &d.toggle),
            NodeRef::MenuToggle => nodes.menu.as_ref().map(|m| &m.toggle),
            NodeRef::MenuPanel => nodes.menu.as_ref().map(|m| &m.panel),
            NodeRef::Overlay => nodes.menu.as_ref().map(|m| &m.overlay),
            NodeRef::Body => Some(AsRef::<Element>::as_ref(&nodes.body)),
            NodeRef::ModalRoot => nodes.modal.as_ref().map(|m| &m.root),
            NodeRef::ModalOpener => nodes.modal.as_ref().map(|m| &m.opener),
            NodeRef::ModalFirstField => nodes.modal.as_ref().and_then(|m| m.first_field.as_ref()),
            NodeRef::ClockDisplay => nodes.clock.as_ref(),
            NodeRef::MessageCount => nodes.contact.count.as_ref(),
            NodeRef::SendButton => nodes.contact.send_button.as_ref(),
            NodeRef::Counter(index) => nodes.counters.get(index),
            NodeRef::Disclosure(index) => nodes
                .disclosures
                .get(index)
                .map(AsRef::<Element>::as_ref),
        }
    }
}

fn report(node: NodeRef, what: &str, result: Result<impl Sized, JsValue>) {
    if let Err(err) = result {
        warn!(?node, ?err, "failed to {what}");
    }
}

impl Surface for DomSurface<'_> {
    fn set_class(&mut self, node: NodeRef, class: &str, enabled: bool) {
        if let Some(element) = self.element(node) {
            report(
                node,
                "toggle class",
                element.class_list().toggle_with_force(class, enabled),
            );
        }
    }

    fn set_attribute(&mut self, node: NodeRef, name: &str, value: &str) {
        if let Some(element) = self.element(node) {
            report(node, "set attribute", element.set_attribute(name, value));
        }
    }

    fn set_flag(&mut self, node: NodeRef, name: &str, present: bool) {
        if let Some(element) = self.element(node) {
            // Re-adding a present flag would not fire events, but skip it anyway.
            if element.has_attribute(name) != present {
                report(
                    node,
                    "toggle attribute",
                    element.toggle_attribute_with_force(name, present),
                );
            }
        }
    }

    fn set_text(&mut self, node: NodeRef, text: &str) {
        if let Some(element) = self.element(node) {
            element.set_text_content(Some(text));
        }
    }

    fn set_disabled(&mut self, node: NodeRef, disabled: bool) {
        if let Some(element) = self.element(node) {
            report(
                node,
                "toggle disabled",
                element.toggle_attribute_with_force("disabled", disabled),
            );
        }
    }

    fn focus(&mut self, node: NodeRef) {
        if let Some(element) = self.element(node).and_then(|e| e.dyn_ref::<HtmlElement>()) {
            report(node, "focus", element.focus());
        }
    }
}

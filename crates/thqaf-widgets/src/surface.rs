//! Projection target for widget state.
//!
//! Widgets never read the DOM back; they write their full state through a
//! [`Surface`] after every change. The browser binding implements it on live
//! elements, [`RecordingSurface`] keeps everything in memory for tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::elements::DropdownHandle;

pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_HIDDEN: &str = "aria-hidden";

/// Logical node a widget writes to. The surface maps it to a real element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeRef {
    DropdownContainer(DropdownHandle),
    DropdownToggle(DropdownHandle),
    MenuToggle,
    MenuPanel,
    Overlay,
    Body,
    ModalRoot,
    ModalOpener,
    ModalFirstField,
    ClockDisplay,
    MessageCount,
    SendButton,
    Counter(usize),
    Disclosure(usize),
}

/// Write-only view of the page. Writes to nodes the page does not have are
/// silently dropped by implementations.
pub trait Surface {
    /// Add or remove a CSS class
    fn set_class(&mut self, node: NodeRef, class: &str, enabled: bool);

    /// Set an attribute value
    fn set_attribute(&mut self, node: NodeRef, name: &str, value: &str);

    /// Add or remove a boolean (valueless) attribute such as `open`
    fn set_flag(&mut self, node: NodeRef, name: &str, present: bool);

    /// Replace the text content
    fn set_text(&mut self, node: NodeRef, text: &str);

    /// Enable or disable a form control
    fn set_disabled(&mut self, node: NodeRef, disabled: bool);

    /// Move input focus
    fn focus(&mut self, node: NodeRef);

    /// Set an ARIA-style `"true"`/`"false"` attribute
    fn set_bool_attribute(&mut self, node: NodeRef, name: &str, value: bool) {
        self.set_attribute(node, name, if value { "true" } else { "false" });
    }
}

/// Recorded state of one node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeRecord {
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub disabled: bool,
    /// Every text written, oldest first
    pub text_history: Vec<String>,
}

impl NodeRecord {
    pub fn text(&self) -> Option<&str> {
        self.text_history.last().map(String::as_str)
    }
}

/// In-memory [`Surface`] used by tests and host-side tooling
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    nodes: HashMap<NodeRef, NodeRecord>,
    focus_history: Vec<NodeRef>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, node: NodeRef) -> Option<&NodeRecord> {
        self.nodes.get(&node)
    }

    pub fn has_class(&self, node: NodeRef, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|record| record.classes.contains(class))
    }

    pub fn attribute(&self, node: NodeRef, name: &str) -> Option<&str> {
        self.nodes
            .get(&node)
            .and_then(|record| record.attributes.get(name))
            .map(String::as_str)
    }

    pub fn has_attribute(&self, node: NodeRef, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    pub fn text(&self, node: NodeRef) -> Option<&str> {
        self.nodes.get(&node).and_then(NodeRecord::text)
    }

    pub fn text_history(&self, node: NodeRef) -> &[String] {
        self.nodes
            .get(&node)
            .map(|record| record.text_history.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_disabled(&self, node: NodeRef) -> bool {
        self.nodes.get(&node).is_some_and(|record| record.disabled)
    }

    /// Node that received focus last
    pub fn focused(&self) -> Option<NodeRef> {
        self.focus_history.last().copied()
    }

    pub fn focus_history(&self) -> &[NodeRef] {
        &self.focus_history
    }

    fn record(&mut self, node: NodeRef) -> &mut NodeRecord {
        self.nodes.entry(node).or_default()
    }
}

impl Surface for RecordingSurface {
    fn set_class(&mut self, node: NodeRef, class: &str, enabled: bool) {
        let record = self.record(node);
        if enabled {
            record.classes.insert(class.to_string());
        } else {
            record.classes.remove(class);
        }
    }

    fn set_attribute(&mut self, node: NodeRef, name: &str, value: &str) {
        self.record(node)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_flag(&mut self, node: NodeRef, name: &str, present: bool) {
        let record = self.record(node);
        if present {
            record.attributes.insert(name.to_string(), String::new());
        } else {
            record.attributes.remove(name);
        }
    }

    fn set_text(&mut self, node: NodeRef, text: &str) {
        let record = self.record(node);
        // Identical rewrites are not a visible frame.
        if record.text() != Some(text) {
            record.text_history.push(text.to_string());
        }
    }

    fn set_disabled(&mut self, node: NodeRef, disabled: bool) {
        self.record(node).disabled = disabled;
    }

    fn focus(&mut self, node: NodeRef) {
        self.focus_history.push(node);
    }
}

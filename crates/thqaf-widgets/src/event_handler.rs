//! Event types and the handler trait shared by the page controllers.
//!
//! The browser binding classifies every DOM event into one of these types
//! before it reaches a widget, so the widgets never see a DOM node.

use crate::elements::DropdownHandle;

/// Result of an event handling operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled and must not reach the document-level click handler
    Handled,
    /// Event continues to the document-level handler, whether or not a
    /// widget reacted to it
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled)
    }
}

/// Keys the controllers react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// The most specific interactive region a click landed in.
///
/// Regions nest (a dropdown toggle sits inside its container, the modal close
/// button inside the dialog content); the binding reports the innermost one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The toggle control of a dropdown
    DropdownToggle(DropdownHandle),
    /// Anywhere else inside a dropdown container or its panel
    DropdownInterior(DropdownHandle),
    /// The hamburger control
    MenuToggle,
    /// Inside the mobile menu panel
    MenuPanel,
    /// The dimming overlay behind the mobile menu
    Overlay,
    ModalOpen,
    ModalClose,
    ModalCancel,
    ModalSubmit,
    /// The modal root itself, not its content
    ModalBackdrop,
    /// Inside the dialog content
    ModalContent,
    /// None of the above
    Elsewhere,
}

impl ClickTarget {
    /// The dropdown whose container holds this target, if any.
    pub fn dropdown(&self) -> Option<DropdownHandle> {
        match self {
            ClickTarget::DropdownToggle(handle) | ClickTarget::DropdownInterior(handle) => {
                Some(*handle)
            }
            _ => None,
        }
    }
}

/// Events routed through [`PageRouter`](crate::PageRouter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Click(ClickTarget),
    KeyDown(Key),
}

/// Unified event handler trait for the page controllers
///
/// Controllers react to the targets they own and return whether the click
/// keeps propagating. Cross-controller effects live in the router.
pub trait EventHandler {
    /// Handle a classified click
    fn handle_click(&mut self, target: ClickTarget) -> EventResult {
        let _ = target;
        EventResult::Ignored
    }

    /// Handle a key press anywhere in the document
    fn handle_key(&mut self, key: Key) -> EventResult {
        let _ = key;
        EventResult::Ignored
    }
}

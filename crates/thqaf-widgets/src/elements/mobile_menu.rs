//! Slide-out menu for narrow screens, with its dimming overlay and body scroll lock.

use thqaf_config::MobileMenuConfig;
use tracing::debug;

use super::WidgetState;
use crate::event_handler::{ClickTarget, EventHandler, EventResult, Key};
use crate::surface::{ARIA_EXPANDED, ARIA_HIDDEN, NodeRef, Surface};

#[derive(Debug, Clone)]
pub struct MobileMenu {
    state: WidgetState,
    open_class: String,
    overlay_active_class: String,
    body_lock_class: String,
}

impl MobileMenu {
    pub fn new(config: &MobileMenuConfig) -> Self {
        Self {
            state: WidgetState::Closed,
            open_class: config.open_class.clone(),
            overlay_active_class: config.overlay_active_class.clone(),
            body_lock_class: config.body_lock_class.clone(),
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn set_open(&mut self, open: bool) {
        let next = WidgetState::from_open(open);
        if next != self.state {
            debug!(open, "mobile menu toggled");
        }
        self.state = next;
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.is_open());
    }

    pub fn project(&self, surface: &mut impl Surface) {
        let open = self.is_open();
        surface.set_class(NodeRef::MenuPanel, &self.open_class, open);
        surface.set_bool_attribute(NodeRef::MenuToggle, ARIA_EXPANDED, open);
        surface.set_class(NodeRef::Overlay, &self.overlay_active_class, open);
        surface.set_bool_attribute(NodeRef::Overlay, ARIA_HIDDEN, !open);
        surface.set_class(NodeRef::Body, &self.body_lock_class, open);
    }
}

impl EventHandler for MobileMenu {
    fn handle_click(&mut self, target: ClickTarget) -> EventResult {
        match target {
            ClickTarget::MenuToggle => {
                self.toggle();
                EventResult::Handled
            }
            ClickTarget::MenuPanel => EventResult::Handled,
            // The overlay only ever closes.
            ClickTarget::Overlay => {
                self.set_open(false);
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, key: Key) -> EventResult {
        if key == Key::Escape {
            self.set_open(false);
        }
        EventResult::Ignored
    }
}

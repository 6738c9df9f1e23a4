//! Login modal: a single dialog that takes focus while active and hands it
//! back to its opener.

use thqaf_config::ModalConfig;
use tracing::debug;

use crate::event_handler::{ClickTarget, EventHandler, EventResult, Key};
use crate::surface::{ARIA_HIDDEN, NodeRef, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    Active,
    #[default]
    Inactive,
}

#[derive(Debug, Clone)]
pub struct LoginModal {
    state: ModalState,
    active_class: String,
    pending_focus: Option<NodeRef>,
}

impl LoginModal {
    pub fn new(config: &ModalConfig) -> Self {
        Self {
            state: ModalState::Inactive,
            active_class: config.active_class.clone(),
            pending_focus: None,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ModalState::Active
    }

    pub fn open(&mut self) {
        debug!("login modal opened");
        self.state = ModalState::Active;
        self.pending_focus = Some(NodeRef::ModalFirstField);
    }

    pub fn close(&mut self) {
        debug!("login modal closed");
        self.state = ModalState::Inactive;
        self.pending_focus = Some(NodeRef::ModalOpener);
    }

    /// Focus move requested by the last transition, consumed once.
    pub fn take_focus_request(&mut self) -> Option<NodeRef> {
        self.pending_focus.take()
    }

    pub fn project(&self, surface: &mut impl Surface) {
        let active = self.is_active();
        surface.set_class(NodeRef::ModalRoot, &self.active_class, active);
        surface.set_bool_attribute(NodeRef::ModalRoot, ARIA_HIDDEN, !active);
    }
}

impl EventHandler for LoginModal {
    fn handle_click(&mut self, target: ClickTarget) -> EventResult {
        match target {
            ClickTarget::ModalOpen => {
                self.open();
                EventResult::Handled
            }
            // Submit closes without waiting for any result from the form.
            ClickTarget::ModalClose
            | ClickTarget::ModalCancel
            | ClickTarget::ModalSubmit
            | ClickTarget::ModalBackdrop => {
                self.close();
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, key: Key) -> EventResult {
        if key == Key::Escape && self.is_active() {
            self.close();
        }
        EventResult::Ignored
    }
}

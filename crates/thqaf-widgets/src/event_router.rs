//! Page router - the one place clicks and key presses are dispatched.
//!
//! Routing is two-phase, mirroring DOM bubbling:
//! 1. the controller owning the click target handles it and may consume it
//! 2. an unconsumed click reaches the document, where [`OutsideClickPolicy`]
//!    decides whether it closes the dropdowns
//!
//! Cross-controller rules (closing the mobile menu resets the dropdowns) live
//! here too; everything else stays in the elements.

use crate::arbitration::{Arbiter, OutsideClickPolicy, PageSnapshot};
use crate::elements::{DropdownManager, LoginModal, MobileMenu};
use crate::event_handler::{ClickTarget, EventHandler, EventResult, Key, PageEvent};
use crate::surface::{NodeRef, Surface};

#[derive(Debug, Clone)]
pub struct PageRouter {
    dropdowns: DropdownManager,
    menu: Option<MobileMenu>,
    modal: Option<LoginModal>,
    policy: OutsideClickPolicy,
}

impl PageRouter {
    /// Controllers whose elements are missing from the page are passed as `None`.
    pub fn new(
        dropdowns: DropdownManager,
        menu: Option<MobileMenu>,
        modal: Option<LoginModal>,
    ) -> Self {
        Self {
            dropdowns,
            menu,
            modal,
            policy: OutsideClickPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: OutsideClickPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn dropdowns(&self) -> &DropdownManager {
        &self.dropdowns
    }

    pub fn menu(&self) -> Option<&MobileMenu> {
        self.menu.as_ref()
    }

    pub fn modal(&self) -> Option<&LoginModal> {
        self.modal.as_ref()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            modal_active: self.modal.as_ref().is_some_and(LoginModal::is_active),
            menu_open: self.menu.as_ref().is_some_and(MobileMenu::is_open),
        }
    }

    /// Dispatch one event. `Handled` means the click was consumed before
    /// reaching the document (the binding stops its propagation).
    pub fn dispatch(&mut self, event: PageEvent) -> EventResult {
        match event {
            PageEvent::Click(target) => self.route_click(target),
            PageEvent::KeyDown(key) => {
                self.route_key(key);
                EventResult::Ignored
            }
        }
    }

    fn route_click(&mut self, target: ClickTarget) -> EventResult {
        let result = match target {
            ClickTarget::DropdownToggle(_) | ClickTarget::DropdownInterior(_) => {
                self.dropdowns.handle_click(target)
            }
            ClickTarget::MenuToggle | ClickTarget::MenuPanel | ClickTarget::Overlay => {
                match self.menu.as_mut() {
                    Some(menu) => {
                        let result = menu.handle_click(target);
                        if target != ClickTarget::MenuPanel && !menu.is_open() {
                            self.dropdowns.close_all();
                        }
                        result
                    }
                    None => EventResult::Ignored,
                }
            }
            ClickTarget::ModalOpen
            | ClickTarget::ModalClose
            | ClickTarget::ModalCancel
            | ClickTarget::ModalSubmit
            | ClickTarget::ModalBackdrop
            | ClickTarget::ModalContent => match self.modal.as_mut() {
                Some(modal) => modal.handle_click(target),
                None => EventResult::Ignored,
            },
            ClickTarget::Elsewhere => EventResult::Ignored,
        };

        if !result.is_handled() {
            self.route_document_click(target);
        }
        result
    }

    fn route_document_click(&mut self, target: ClickTarget) {
        let owner = self.policy.owner(self.snapshot());
        if owner == Arbiter::Dropdowns && target.dropdown().is_none() {
            self.dropdowns.close_all();
        }
    }

    fn route_key(&mut self, key: Key) {
        self.dropdowns.handle_key(key);
        if let Some(menu) = self.menu.as_mut() {
            menu.handle_key(key);
            if key == Key::Escape {
                self.dropdowns.close_all();
            }
        }
        if let Some(modal) = self.modal.as_mut() {
            modal.handle_key(key);
        }
    }

    /// Focus move requested by the last dispatch, consumed once.
    pub fn take_focus_request(&mut self) -> Option<NodeRef> {
        self.modal.as_mut().and_then(LoginModal::take_focus_request)
    }

    /// Write the state of every coordinated controller.
    pub fn project(&self, surface: &mut impl Surface) {
        self.dropdowns.project(surface);
        if let Some(menu) = &self.menu {
            menu.project(surface);
        }
        if let Some(modal) = &self.modal {
            modal.project(surface);
        }
    }

    /// Project, then apply any pending focus move.
    pub fn render(&mut self, surface: &mut impl Surface) {
        self.project(surface);
        if let Some(node) = self.take_focus_request() {
            surface.focus(node);
        }
    }
}

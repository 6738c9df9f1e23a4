//! Ownership of document-level clicks.
//!
//! A click that no widget consumed reaches the document. Exactly one
//! controller owns it, picked by precedence from the page state at that
//! moment: an active modal owns its backdrop, an open mobile menu owns the
//! overlay, and only otherwise do dropdowns treat it as an outside click.

/// Controllers that can claim a document-level click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arbiter {
    Modal,
    MobileMenu,
    Dropdowns,
}

/// Page state the policy looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSnapshot {
    pub modal_active: bool,
    pub menu_open: bool,
}

impl Arbiter {
    fn claims(self, snapshot: PageSnapshot) -> bool {
        match self {
            Arbiter::Modal => snapshot.modal_active,
            Arbiter::MobileMenu => snapshot.menu_open,
            Arbiter::Dropdowns => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutsideClickPolicy {
    precedence: [Arbiter; 3],
}

impl Default for OutsideClickPolicy {
    fn default() -> Self {
        Self {
            precedence: [Arbiter::Modal, Arbiter::MobileMenu, Arbiter::Dropdowns],
        }
    }
}

impl OutsideClickPolicy {
    pub fn new(precedence: [Arbiter; 3]) -> Self {
        Self { precedence }
    }

    pub fn precedence(&self) -> &[Arbiter] {
        &self.precedence
    }

    /// First controller, in precedence order, that claims the click.
    pub fn owner(&self, snapshot: PageSnapshot) -> Arbiter {
        self.precedence
            .iter()
            .copied()
            .find(|arbiter| arbiter.claims(snapshot))
            .unwrap_or(Arbiter::Dropdowns)
    }
}

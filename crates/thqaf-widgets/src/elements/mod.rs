//! Page widgets. Each owns its state and projects it onto a [`Surface`](crate::Surface).

pub mod accordion;
pub mod clock;
pub mod contact;
pub mod counters;
pub mod dropdown;
pub mod mobile_menu;
pub mod modal;

pub use accordion::Accordion;
pub use clock::LiveClock;
pub use contact::{ContactForm, SubmitState};
pub use counters::{CounterBoard, CounterPhase, Trigger, format_number, parse_target};
pub use dropdown::{DropdownHandle, DropdownManager, DropdownNodes, DropdownParts};
pub use mobile_menu::MobileMenu;
pub use modal::{LoginModal, ModalState};

/// Open/closed state shared by dropdowns, the mobile menu and disclosures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    Open,
    #[default]
    Closed,
}

impl WidgetState {
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

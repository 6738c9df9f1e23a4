//! Interactive widgets for the public site pages.
//!
//! Every widget is a small state machine; the DOM is only ever written through
//! [`Surface`](surface::Surface) as a projection of that state. This keeps the
//! behavior testable on the host with [`RecordingSurface`](surface::RecordingSurface).
//!
//! - [`elements`]: dropdowns, mobile menu, login modal, clock, contact form,
//!   landing counters and FAQ accordion
//! - [`arbitration`]: which controller owns a document-level click
//! - [`event_router`]: the single dispatcher for clicks and key presses
//! - [`animation`]: count-up tween used by the landing counters

pub mod animation;
pub mod arbitration;
pub mod elements;
pub mod event_handler;
pub mod event_router;
pub mod surface;

pub use arbitration::{Arbiter, OutsideClickPolicy, PageSnapshot};
pub use event_handler::{ClickTarget, EventHandler, EventResult, Key, PageEvent};
pub use event_router::PageRouter;
pub use surface::{NodeRef, RecordingSurface, Surface};

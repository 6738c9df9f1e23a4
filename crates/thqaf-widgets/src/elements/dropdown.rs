//! Navigation dropdowns with mutual exclusion.

use tracing::debug;

use super::WidgetState;
use crate::event_handler::{ClickTarget, EventHandler, EventResult, Key};
use crate::surface::{ARIA_EXPANDED, NodeRef, Surface};

/// Stable index of a registered dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DropdownHandle(usize);

impl DropdownHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A candidate container found in the page, before validation
#[derive(Debug, Clone)]
pub struct DropdownParts<N> {
    pub container: N,
    pub toggle: Option<N>,
    pub panel: Option<N>,
}

/// Host nodes of a registered dropdown; `DropdownNodes[i]` belongs to handle `i`
#[derive(Debug, Clone)]
pub struct DropdownNodes<N> {
    pub handle: DropdownHandle,
    pub container: N,
    pub toggle: N,
    pub panel: N,
}

/// Owns every dropdown of the page. Built once; the set never changes.
///
/// `open_only` and `close_all` are the whole mutation surface, which keeps
/// "at most one open" true after every call.
#[derive(Debug, Clone)]
pub struct DropdownManager {
    states: Vec<WidgetState>,
    open_class: String,
}

impl DropdownManager {
    pub fn new(count: usize, open_class: impl Into<String>) -> Self {
        Self {
            states: vec![WidgetState::Closed; count],
            open_class: open_class.into(),
        }
    }

    /// Register every candidate that has both a toggle and a panel.
    /// Incomplete containers are skipped without error.
    pub fn from_parts<N>(
        parts: impl IntoIterator<Item = DropdownParts<N>>,
        open_class: impl Into<String>,
    ) -> (Self, Vec<DropdownNodes<N>>) {
        let mut nodes = Vec::new();
        for part in parts {
            let (Some(toggle), Some(panel)) = (part.toggle, part.panel) else {
                debug!("skipping dropdown container without toggle or panel");
                continue;
            };
            nodes.push(DropdownNodes {
                handle: DropdownHandle(nodes.len()),
                container: part.container,
                toggle,
                panel,
            });
        }
        (Self::new(nodes.len(), open_class), nodes)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = DropdownHandle> + '_ {
        (0..self.states.len()).map(DropdownHandle)
    }

    pub fn state(&self, handle: DropdownHandle) -> Option<WidgetState> {
        self.states.get(handle.0).copied()
    }

    pub fn is_open(&self, handle: DropdownHandle) -> bool {
        self.state(handle).is_some_and(WidgetState::is_open)
    }

    /// The open dropdown, if any
    pub fn open_handle(&self) -> Option<DropdownHandle> {
        self.states
            .iter()
            .position(|state| state.is_open())
            .map(DropdownHandle)
    }

    /// Open `handle` and close every other dropdown in the same pass.
    /// Unknown handles leave the state untouched.
    pub fn open_only(&mut self, handle: DropdownHandle) {
        if handle.0 >= self.states.len() {
            return;
        }
        for (index, state) in self.states.iter_mut().enumerate() {
            *state = WidgetState::from_open(index == handle.0);
        }
        debug!(dropdown = handle.0, "dropdown opened");
    }

    pub fn close_all(&mut self) {
        if self.open_handle().is_some() {
            debug!("dropdowns closed");
        }
        self.states.fill(WidgetState::Closed);
    }

    /// Toggle-control activation: open exclusively, or close if already open.
    pub fn toggle(&mut self, handle: DropdownHandle) {
        if self.is_open(handle) {
            self.close_all();
        } else {
            self.open_only(handle);
        }
    }

    pub fn project(&self, surface: &mut impl Surface) {
        for (index, state) in self.states.iter().enumerate() {
            let handle = DropdownHandle(index);
            let open = state.is_open();
            surface.set_class(NodeRef::DropdownContainer(handle), &self.open_class, open);
            surface.set_bool_attribute(NodeRef::DropdownToggle(handle), ARIA_EXPANDED, open);
        }
    }
}

impl EventHandler for DropdownManager {
    fn handle_click(&mut self, target: ClickTarget) -> EventResult {
        match target {
            ClickTarget::DropdownToggle(handle) => {
                self.toggle(handle);
                EventResult::Handled
            }
            ClickTarget::DropdownInterior(_) => EventResult::Handled,
            _ => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, key: Key) -> EventResult {
        if key == Key::Escape {
            self.close_all();
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn part(toggle: bool, panel: bool) -> DropdownParts<&'static str> {
        DropdownParts {
            container: "wrap",
            toggle: toggle.then_some("btn"),
            panel: panel.then_some("panel"),
        }
    }

    #[test]
    fn skips_incomplete_containers() {
        let (manager, nodes) = DropdownManager::from_parts(
            [part(true, true), part(false, true), part(true, false), part(true, true)],
            "open",
        );
        assert_eq!(manager.len(), 2);
        assert_eq!(nodes[0].handle, DropdownHandle::new(0));
        assert_eq!(nodes[1].handle, DropdownHandle::new(1));
    }

    #[test]
    fn toggle_switches_exclusively() {
        let mut manager = DropdownManager::new(3, "open");
        let (a, b) = (DropdownHandle::new(0), DropdownHandle::new(1));

        manager.toggle(a);
        assert_eq!(manager.open_handle(), Some(a));

        manager.toggle(b);
        assert_eq!(manager.open_handle(), Some(b));
        assert!(!manager.is_open(a));

        manager.toggle(b);
        assert_eq!(manager.open_handle(), None);
    }

    #[test]
    fn unknown_handle_is_ignored() {
        let mut manager = DropdownManager::new(1, "open");
        manager.open_only(DropdownHandle::new(0));
        manager.open_only(DropdownHandle::new(7));
        assert_eq!(manager.open_handle(), Some(DropdownHandle::new(0)));
    }

    #[test]
    fn escape_closes_everything() {
        let mut manager = DropdownManager::new(2, "open");
        manager.open_only(DropdownHandle::new(1));
        assert_eq!(manager.handle_key(Key::Escape), EventResult::Ignored);
        assert_eq!(manager.open_handle(), None);
    }

    #[test]
    fn projection_mirrors_aria_expanded() {
        let mut manager = DropdownManager::new(2, "open");
        let mut surface = RecordingSurface::new();
        manager.open_only(DropdownHandle::new(1));
        manager.project(&mut surface);

        let (a, b) = (DropdownHandle::new(0), DropdownHandle::new(1));
        assert!(!surface.has_class(NodeRef::DropdownContainer(a), "open"));
        assert!(surface.has_class(NodeRef::DropdownContainer(b), "open"));
        assert_eq!(surface.attribute(NodeRef::DropdownToggle(a), ARIA_EXPANDED), Some("false"));
        assert_eq!(surface.attribute(NodeRef::DropdownToggle(b), ARIA_EXPANDED), Some("true"));
    }
}

//! FAQ list where opening one answer closes the others.

use super::WidgetState;
use crate::surface::{NodeRef, Surface};

const OPEN_ATTRIBUTE: &str = "open";

#[derive(Debug, Clone, Default)]
pub struct Accordion {
    items: Vec<WidgetState>,
}

impl Accordion {
    /// Build from each disclosure's initial `open` attribute.
    pub fn new(initial: impl IntoIterator<Item = bool>) -> Self {
        Self {
            items: initial.into_iter().map(WidgetState::from_open).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|state| state.is_open())
    }

    pub fn open_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_open())
            .map(|(index, _)| index)
            .collect()
    }

    /// Record a disclosure's `toggle` event.
    pub fn on_toggle(&mut self, index: usize, open: bool) {
        if index >= self.items.len() {
            return;
        }
        if !open {
            self.items[index] = WidgetState::Closed;
            return;
        }
        for (other, state) in self.items.iter_mut().enumerate() {
            *state = WidgetState::from_open(other == index);
        }
    }

    pub fn project(&self, surface: &mut impl Surface) {
        for (index, state) in self.items.iter().enumerate() {
            surface.set_flag(NodeRef::Disclosure(index), OPEN_ATTRIBUTE, state.is_open());
        }
    }
}

//! Click target classification.
//!
//! Walks from the event target up through its ancestors and reports the first
//! registered node it meets, the same order DOM bubbling would visit the
//! per-element listeners in.

use std::iter;

use thqaf_widgets::ClickTarget;
use thqaf_widgets::elements::DropdownNodes;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::dom::{MenuNodes, ModalNodes, PageNodes};

/// The clickable regions of a page, keyed by node identity.
#[derive(Debug)]
pub struct ClickRegions<'a, N> {
    pub dropdowns: &'a [DropdownNodes<N>],
    pub menu: Option<&'a MenuNodes<N>>,
    pub modal: Option<&'a ModalNodes<N>>,
}

impl<N: PartialEq> ClickRegions<'_, N> {
    fn at(&self, node: &N, is_target: bool) -> Option<ClickTarget> {
        for dropdown in self.dropdowns {
            if dropdown.toggle == *node {
                return Some(ClickTarget::DropdownToggle(dropdown.handle));
            }
            if dropdown.panel == *node || dropdown.container == *node {
                return Some(ClickTarget::DropdownInterior(dropdown.handle));
            }
        }

        if let Some(modal) = self.modal {
            if modal.opener == *node {
                return Some(ClickTarget::ModalOpen);
            }
            if modal.close.as_ref() == Some(node) {
                return Some(ClickTarget::ModalClose);
            }
            if modal.cancel.as_ref() == Some(node) {
                return Some(ClickTarget::ModalCancel);
            }
            if modal.submit.as_ref() == Some(node) {
                return Some(ClickTarget::ModalSubmit);
            }
            if modal.root == *node {
                // Only a click on the root itself is a backdrop click.
                return Some(if is_target {
                    ClickTarget::ModalBackdrop
                } else {
                    ClickTarget::ModalContent
                });
            }
        }

        if let Some(menu) = self.menu {
            if menu.toggle == *node {
                return Some(ClickTarget::MenuToggle);
            }
            if menu.panel == *node {
                return Some(ClickTarget::MenuPanel);
            }
            if menu.overlay == *node {
                return Some(ClickTarget::Overlay);
            }
        }

        None
    }

    /// Classify a click from its target followed by its ancestors.
    pub fn classify(&self, chain: impl IntoIterator<Item = N>) -> ClickTarget {
        chain
            .into_iter()
            .enumerate()
            .find_map(|(depth, node)| self.at(&node, depth == 0))
            .unwrap_or(ClickTarget::Elsewhere)
    }
}

impl PageNodes {
    pub fn regions(&self) -> ClickRegions<'_, Element> {
        ClickRegions {
            dropdowns: &self.dropdowns,
            menu: self.menu.as_ref(),
            modal: self.modal.as_ref(),
        }
    }
}

/// Classify the target of a click event.
pub fn classify(nodes: &PageNodes, target: Option<Node>) -> ClickTarget {
    let start = target.and_then(|node| node.dyn_into::<Element>().ok());
    nodes
        .regions()
        .classify(iter::successors(start, |el: &Element| el.parent_element()))
}

/// Whether the default action of a click on this target is suppressed.
/// Toggles are often `<a href="#">` links.
pub fn prevents_default(target: ClickTarget) -> bool {
    matches!(
        target,
        ClickTarget::DropdownToggle(_) | ClickTarget::MenuToggle | ClickTarget::ModalOpen
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use thqaf_widgets::elements::DropdownHandle;

    // Nodes are named by id; chains list the target first.
    fn dropdowns() -> Vec<DropdownNodes<&'static str>> {
        vec![DropdownNodes {
            handle: DropdownHandle::new(0),
            container: "nav-item",
            toggle: "nav-btn",
            panel: "nav-panel",
        }]
    }

    fn menu() -> MenuNodes<&'static str> {
        MenuNodes {
            toggle: "hamburger",
            panel: "menu",
            overlay: "overlay",
        }
    }

    fn modal() -> ModalNodes<&'static str> {
        ModalNodes {
            root: "modal",
            opener: "login",
            close: Some("close"),
            cancel: Some("cancel"),
            submit: None,
            first_field: Some("phone"),
        }
    }

    fn classify_chain(chain: &[&'static str]) -> ClickTarget {
        let (dropdowns, menu, modal) = (dropdowns(), menu(), modal());
        let regions = ClickRegions {
            dropdowns: &dropdowns,
            menu: Some(&menu),
            modal: Some(&modal),
        };
        regions.classify(chain.iter().copied())
    }

    #[test]
    fn modal_root_click_is_backdrop() {
        assert_eq!(classify_chain(&["modal", "body"]), ClickTarget::ModalBackdrop);
    }

    #[test]
    fn clicks_inside_dialog_are_content() {
        assert_eq!(
            classify_chain(&["phone", "form", "dialog", "modal", "body"]),
            ClickTarget::ModalContent
        );
        assert_eq!(
            classify_chain(&["dialog", "modal", "body"]),
            ClickTarget::ModalContent
        );
    }

    #[test]
    fn nested_close_button_wins_over_root() {
        assert_eq!(
            classify_chain(&["icon", "close", "dialog", "modal", "body"]),
            ClickTarget::ModalClose
        );
        assert_eq!(
            classify_chain(&["cancel", "modal"]),
            ClickTarget::ModalCancel
        );
    }

    #[test]
    fn dropdown_inside_menu_panel_is_a_dropdown_click() {
        let handle = DropdownHandle::new(0);
        assert_eq!(
            classify_chain(&["label", "nav-btn", "nav-item", "menu", "body"]),
            ClickTarget::DropdownToggle(handle)
        );
        assert_eq!(
            classify_chain(&["link", "nav-panel", "nav-item", "menu", "body"]),
            ClickTarget::DropdownInterior(handle)
        );
        assert_eq!(
            classify_chain(&["link", "menu", "body"]),
            ClickTarget::MenuPanel
        );
    }

    #[test]
    fn unregistered_chain_is_elsewhere() {
        assert_eq!(classify_chain(&["p", "main", "body"]), ClickTarget::Elsewhere);
        assert_eq!(classify_chain(&[]), ClickTarget::Elsewhere);
        assert_eq!(classify_chain(&["overlay", "body"]), ClickTarget::Overlay);
    }

    #[test]
    fn only_toggles_prevent_default() {
        assert!(prevents_default(ClickTarget::DropdownToggle(DropdownHandle::new(0))));
        assert!(prevents_default(ClickTarget::MenuToggle));
        assert!(prevents_default(ClickTarget::ModalOpen));
        assert!(!prevents_default(ClickTarget::ModalSubmit));
        assert!(!prevents_default(ClickTarget::Overlay));
        assert!(!prevents_default(ClickTarget::Elsewhere));
    }
}

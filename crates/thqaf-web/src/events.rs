//! Document-level click and keydown listeners feeding the [`PageRouter`].

use std::cell::RefCell;
use std::rc::Rc;

use thqaf_widgets::{Key, PageEvent, PageRouter};
use tracing::trace;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Event, KeyboardEvent, Node};

use crate::classify::{classify, prevents_default};
use crate::dom::PageNodes;
use crate::error::Result;
use crate::surface::DomSurface;

/// Attach the single click dispatcher and the Escape handler.
pub fn bind_router(
    document: &Document,
    nodes: Rc<PageNodes>,
    router: Rc<RefCell<PageRouter>>,
) -> Result<()> {
    router.borrow_mut().render(&mut DomSurface::new(&nodes));

    let on_click = {
        let nodes = nodes.clone();
        let router = router.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let click = classify(&nodes, target);
            trace!(?click, "click");
            if prevents_default(click) {
                event.prevent_default();
            }

            let mut router = router.borrow_mut();
            if router.dispatch(PageEvent::Click(click)).is_handled() {
                event.stop_propagation();
            }
            router.render(&mut DomSurface::new(&nodes));
        })
    };
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let on_keydown = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = Key::from_dom_key(&event.key());
        if key == Key::Other {
            return;
        }
        let mut router = router.borrow_mut();
        router.dispatch(PageEvent::KeyDown(key));
        router.render(&mut DomSurface::new(&nodes));
    });
    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();

    Ok(())
}

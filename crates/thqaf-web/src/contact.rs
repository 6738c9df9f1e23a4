//! Contact page: message length counter and submit lock.

use std::cell::RefCell;
use std::rc::Rc;

use thqaf_widgets::elements::ContactForm;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::dom::{PageNodes, field_value};
use crate::error::Result;
use crate::surface::DomSurface;

pub fn bind_contact(nodes: Rc<PageNodes>, form: Rc<RefCell<ContactForm>>) -> Result<()> {
    let contact = &nodes.contact;

    match (&contact.message, &contact.count) {
        (Some(message), Some(_)) => {
            let sync = {
                let nodes = nodes.clone();
                let form = form.clone();
                move || {
                    let Some(message) = &nodes.contact.message else {
                        return;
                    };
                    let mut form = form.borrow_mut();
                    form.sync_message(&field_value(message).unwrap_or_default());
                    form.project(&mut DomSurface::new(&nodes));
                }
            };
            // Prefilled values count before the first keystroke.
            sync();
            let on_input = Closure::<dyn FnMut()>::new(sync);
            message.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
            on_input.forget();
        }
        _ => debug!("contact counter not present"),
    }

    match (&contact.form, &contact.send_button) {
        (Some(element), Some(_)) => {
            let on_submit = {
                let nodes = nodes.clone();
                Closure::<dyn FnMut()>::new(move || {
                    let mut form = form.borrow_mut();
                    form.submit();
                    form.project(&mut DomSurface::new(&nodes));
                })
            };
            element.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
            on_submit.forget();
        }
        _ => debug!("contact submit lock not present"),
    }

    Ok(())
}

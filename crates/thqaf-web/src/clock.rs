//! Header clock refresh timer.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Interval;
use thqaf_widgets::elements::LiveClock;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::Window;

use crate::dom::PageNodes;
use crate::error::Result;
use crate::surface::DomSurface;

/// Running clock timer. Dropping it stops the clock.
pub struct ClockBinding {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl ClockBinding {
    pub fn is_running(&self) -> bool {
        self.interval.borrow().is_some()
    }
}

fn render(clock: &LiveClock, nodes: &PageNodes) {
    clock.project(Utc::now(), &mut DomSurface::new(nodes));
}

/// Render now and every `clock.interval()` until the page unloads.
/// Returns `None` when the display is missing or the clock is already bound.
pub fn bind_clock(
    window: &Window,
    nodes: Rc<PageNodes>,
    clock: &mut LiveClock,
) -> Result<Option<ClockBinding>> {
    if nodes.clock.is_none() {
        debug!("clock display not present");
        return Ok(None);
    }
    if !clock.bind() {
        return Ok(None);
    }

    render(clock, &nodes);
    let millis = u32::try_from(clock.interval().as_millis()).unwrap_or(u32::MAX);
    let ticking = clock.clone();
    let interval = Interval::new(millis, move || render(&ticking, &nodes));
    let interval = Rc::new(RefCell::new(Some(interval)));

    let on_unload = {
        let interval = interval.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(interval) = interval.borrow_mut().take() {
                interval.cancel();
            }
        })
    };
    window.add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref())?;
    on_unload.forget();

    Ok(Some(ClockBinding { interval }))
}

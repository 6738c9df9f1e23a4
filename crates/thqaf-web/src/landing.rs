//! Landing page: count-up statistics and the FAQ accordion.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use thqaf_config::LandingConfig;
use thqaf_widgets::elements::{Accordion, CounterBoard, Trigger, parse_target};
use tracing::{debug, warn};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::dom::PageNodes;
use crate::error::Result;
use crate::surface::DomSurface;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

type FrameCallback = Closure<dyn FnMut(f64)>;

fn prefers_reduced_motion(window: &Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(list) => list.is_some_and(|list| list.matches()),
        Err(err) => {
            warn!(?err, "media query failed");
            false
        }
    }
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map_or(0.0, |performance| performance.now())
}

fn request_frame(window: &Window, callback: &FrameCallback) {
    if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        warn!(?err, "requestAnimationFrame failed");
    }
}

/// Drive one counter with animation frames until it reports done.
fn animate(window: Window, nodes: Rc<PageNodes>, board: Rc<RefCell<CounterBoard>>, index: usize) {
    let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    let frame_window = window.clone();

    *frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        let more = board.borrow_mut().tick(index, timestamp);
        board
            .borrow()
            .project_one(index, &mut DomSurface::new(&nodes));
        if more {
            if let Some(callback) = next.borrow().as_ref() {
                request_frame(&frame_window, callback);
            }
        } else {
            // Breaks the self-reference so the closure is freed.
            let _ = next.borrow_mut().take();
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        request_frame(&window, callback);
    }
}

/// Watch every counter and start it the first time it is visible enough.
pub fn bind_counters(
    window: &Window,
    nodes: Rc<PageNodes>,
    config: &LandingConfig,
) -> Result<Option<Rc<RefCell<CounterBoard>>>> {
    if nodes.counters.is_empty() {
        debug!("no landing counters");
        return Ok(None);
    }

    let targets = nodes
        .counters
        .iter()
        .map(|counter| parse_target(counter.get_attribute(&config.target_attribute).as_deref()));
    let board = Rc::new(RefCell::new(CounterBoard::new(
        targets,
        config,
        prefers_reduced_motion(window),
    )));

    let on_intersect = {
        let window = window.clone();
        let nodes = nodes.clone();
        let board = board.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let now = now_ms(&window);
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = nodes.counter_index(&target) else {
                        continue;
                    };
                    let ratio = if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    };

                    let trigger = board.borrow_mut().observe(index, ratio, now);
                    if trigger == Trigger::Ignored {
                        continue;
                    }
                    observer.unobserve(&target);
                    board
                        .borrow()
                        .project_one(index, &mut DomSurface::new(&nodes));
                    if trigger == Trigger::Animate {
                        animate(window.clone(), nodes.clone(), board.clone(), index);
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    for counter in &nodes.counters {
        observer.observe(counter);
    }
    on_intersect.forget();

    Ok(Some(board))
}

/// Keep at most one FAQ entry open.
pub fn bind_faq(nodes: Rc<PageNodes>) -> Result<Option<Rc<RefCell<Accordion>>>> {
    if nodes.disclosures.is_empty() {
        debug!("no faq entries");
        return Ok(None);
    }

    let accordion = Rc::new(RefCell::new(Accordion::new(
        nodes.disclosures.iter().map(|details| details.open()),
    )));

    for (index, details) in nodes.disclosures.iter().enumerate() {
        let on_toggle = {
            let nodes = nodes.clone();
            let accordion = accordion.clone();
            Closure::<dyn FnMut()>::new(move || {
                let Some(details) = nodes.disclosures.get(index) else {
                    return;
                };
                let mut accordion = accordion.borrow_mut();
                accordion.on_toggle(index, details.open());
                accordion.project(&mut DomSurface::new(&nodes));
            })
        };
        details.add_event_listener_with_callback("toggle", on_toggle.as_ref().unchecked_ref())?;
        on_toggle.forget();
    }

    Ok(Some(accordion))
}

//! DOM-level checks. Run with `wasm-pack test --headless --chrome crates/thqaf-web`.
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use thqaf_config::{LandingConfig, SiteConfig};
use thqaf_web::classify::classify;
use thqaf_web::clock::bind_clock;
use thqaf_web::dom::{PageNodes, ensure_overlay};
use thqaf_widgets::ClickTarget;
use thqaf_widgets::elements::{DropdownHandle, LiveClock};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Window};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<nav id="menu">
  <div class="dropdown" id="dd">
    <a class="dropbtn" id="dd-btn"><span id="dd-label">Services</span></a>
    <div class="dropdown-menu" id="dd-panel"><a id="dd-link">Courses</a></div>
  </div>
</nav>
<button id="hamburger">menu</button>
<button id="loginBtn">login</button>
<div id="adminModal">
  <div id="dialog">
    <button id="closeAdminModal"><span id="close-icon">x</span></button>
    <input id="adminPhone">
  </div>
</div>
<span id="liveTime"></span>
<div class="faq"><details></details><details></details></div>
"#;

fn window() -> Window {
    web_sys::window().expect("window")
}

fn page() -> Document {
    let document = window().document().expect("document");
    document.body().expect("body").set_inner_html(FIXTURE);
    document
}

fn element(document: &Document, id: &str) -> Element {
    document.get_element_by_id(id).expect(id)
}

fn click_on(nodes: &PageNodes, target: &Element) -> ClickTarget {
    classify(nodes, Some(target.clone().into()))
}

#[wasm_bindgen_test]
fn overlay_is_created_once() {
    let document = page();
    let body = document.body().expect("body");

    let first = ensure_overlay(&document, &body, "menu-overlay").expect("overlay");
    let second = ensure_overlay(&document, &body, "menu-overlay").expect("overlay");
    assert!(first.is_same_node(Some(second.as_ref())));

    let config = SiteConfig::default();
    PageNodes::bind(&document, &config).expect("bind");
    PageNodes::bind(&document, &config).expect("rebind");
    let overlays = document.query_selector_all(".menu-overlay").expect("query");
    assert_eq!(overlays.length(), 1);
}

#[wasm_bindgen_test]
fn classifies_live_targets() {
    let document = page();
    let (nodes, dropdowns) = PageNodes::bind(&document, &SiteConfig::default()).expect("bind");
    assert_eq!(dropdowns.len(), 1);
    let handle = DropdownHandle::new(0);

    assert_eq!(click_on(&nodes, &element(&document, "adminModal")), ClickTarget::ModalBackdrop);
    assert_eq!(click_on(&nodes, &element(&document, "dialog")), ClickTarget::ModalContent);
    assert_eq!(click_on(&nodes, &element(&document, "adminPhone")), ClickTarget::ModalContent);
    assert_eq!(click_on(&nodes, &element(&document, "close-icon")), ClickTarget::ModalClose);
    assert_eq!(
        click_on(&nodes, &element(&document, "dd-label")),
        ClickTarget::DropdownToggle(handle)
    );
    assert_eq!(
        click_on(&nodes, &element(&document, "dd-link")),
        ClickTarget::DropdownInterior(handle)
    );
    assert_eq!(click_on(&nodes, &element(&document, "menu")), ClickTarget::MenuPanel);
    assert_eq!(click_on(&nodes, &element(&document, "liveTime")), ClickTarget::Elsewhere);
}

#[wasm_bindgen_test]
fn rejected_selector_skips_only_its_widget() {
    let document = page();
    let config = SiteConfig {
        landing: LandingConfig {
            faq_selector: "[".to_string(),
            ..LandingConfig::default()
        },
        ..SiteConfig::default()
    };

    let (nodes, dropdowns) = PageNodes::bind(&document, &config).expect("bind");
    assert!(nodes.disclosures.is_empty());
    assert_eq!(dropdowns.len(), 1);
    assert!(nodes.menu.is_some());
    assert!(nodes.modal.is_some());
    assert!(nodes.clock.is_some());
}

#[wasm_bindgen_test]
fn clock_renders_and_binds_once() {
    let document = page();
    let config = SiteConfig::default();
    let (nodes, _) = PageNodes::bind(&document, &config).expect("bind");
    let nodes = Rc::new(nodes);
    let mut clock = LiveClock::new(&config.clock);

    let binding = bind_clock(&window(), nodes.clone(), &mut clock)
        .expect("bind clock")
        .expect("clock display present");
    assert!(binding.is_running());
    let text = element(&document, "liveTime").text_content().unwrap_or_default();
    assert!(text.starts_with(&config.clock.prefix), "{text}");

    assert!(bind_clock(&window(), nodes, &mut clock).expect("rebind").is_none());
}

use proptest::prelude::*;
use thqaf_config::{ContactConfig, LandingConfig, MobileMenuConfig, ModalConfig};
use thqaf_widgets::elements::{
    Accordion, ContactForm, CounterBoard, DropdownHandle, DropdownManager, LoginModal, MobileMenu,
    Trigger, parse_target,
};
use thqaf_widgets::surface::{ARIA_EXPANDED, ARIA_HIDDEN};
use thqaf_widgets::{ClickTarget, EventResult, Key, NodeRef, PageEvent, PageRouter, RecordingSurface};

fn page(dropdowns: usize) -> PageRouter {
    PageRouter::new(
        DropdownManager::new(dropdowns, "open"),
        Some(MobileMenu::new(&MobileMenuConfig::default())),
        Some(LoginModal::new(&ModalConfig::default())),
    )
}

fn click(router: &mut PageRouter, target: ClickTarget) -> EventResult {
    router.dispatch(PageEvent::Click(target))
}

fn open_count(surface: &RecordingSurface, dropdowns: usize) -> usize {
    (0..dropdowns)
        .filter(|&i| surface.has_class(NodeRef::DropdownContainer(DropdownHandle::new(i)), "open"))
        .count()
}

proptest! {
    #[test]
    fn at_most_one_dropdown_is_open(toggles in proptest::collection::vec(0usize..4, 0..40)) {
        let mut router = page(4);
        let mut surface = RecordingSurface::new();
        for index in toggles {
            click(&mut router, ClickTarget::DropdownToggle(DropdownHandle::new(index)));
            router.render(&mut surface);
            prop_assert!(open_count(&surface, 4) <= 1);
            prop_assert!(router.dropdowns().handles().filter(|h| router.dropdowns().is_open(*h)).count() <= 1);
        }
    }
}

#[test]
fn switching_dropdowns_happens_in_one_pass() {
    let mut router = page(3);
    let mut surface = RecordingSurface::new();
    let (first, second) = (DropdownHandle::new(0), DropdownHandle::new(2));

    click(&mut router, ClickTarget::DropdownToggle(first));
    router.render(&mut surface);

    let result = click(&mut router, ClickTarget::DropdownToggle(second));
    router.render(&mut surface);

    assert!(result.is_handled());
    assert_eq!(router.dropdowns().open_handle(), Some(second));
    assert!(!surface.has_class(NodeRef::DropdownContainer(first), "open"));
    assert!(surface.has_class(NodeRef::DropdownContainer(second), "open"));
    assert_eq!(surface.attribute(NodeRef::DropdownToggle(first), ARIA_EXPANDED), Some("false"));
    assert_eq!(surface.attribute(NodeRef::DropdownToggle(second), ARIA_EXPANDED), Some("true"));
}

#[test]
fn escape_after_opening_menu_closes_everything() {
    let mut router = page(2);
    let mut surface = RecordingSurface::new();

    click(&mut router, ClickTarget::MenuToggle);
    click(&mut router, ClickTarget::DropdownToggle(DropdownHandle::new(1)));
    router.render(&mut surface);
    assert!(surface.has_class(NodeRef::Body, "menu-lock"));

    router.dispatch(PageEvent::KeyDown(Key::Escape));
    router.render(&mut surface);

    assert!(!router.snapshot().menu_open);
    assert_eq!(router.dropdowns().open_handle(), None);
    assert!(!surface.has_class(NodeRef::MenuPanel, "open"));
    assert!(!surface.has_class(NodeRef::Body, "menu-lock"));
    assert_eq!(surface.attribute(NodeRef::Overlay, ARIA_HIDDEN), Some("true"));
    assert_eq!(open_count(&surface, 2), 0);
}

#[test]
fn clicks_inside_a_dropdown_never_close_it() {
    let mut router = page(2);
    let handle = DropdownHandle::new(0);
    click(&mut router, ClickTarget::DropdownToggle(handle));

    for _ in 0..3 {
        let result = click(&mut router, ClickTarget::DropdownInterior(handle));
        assert!(result.is_handled());
        assert!(router.dropdowns().is_open(handle));
    }
}

#[test]
fn active_modal_owns_document_clicks() {
    let mut router = page(1);
    let handle = DropdownHandle::new(0);
    click(&mut router, ClickTarget::DropdownToggle(handle));
    click(&mut router, ClickTarget::ModalOpen);

    // Content clicks bubble, but the modal owns them.
    click(&mut router, ClickTarget::ModalContent);
    assert!(router.snapshot().modal_active);
    assert!(router.dropdowns().is_open(handle));

    // Once closed, the same bubbling click is an outside click again.
    click(&mut router, ClickTarget::ModalClose);
    assert!(!router.snapshot().modal_active);
    assert_eq!(router.dropdowns().open_handle(), None);
}

#[test]
fn modal_focus_round_trip_for_every_close_trigger() {
    let closers = [
        PageEvent::Click(ClickTarget::ModalClose),
        PageEvent::Click(ClickTarget::ModalCancel),
        PageEvent::Click(ClickTarget::ModalSubmit),
        PageEvent::Click(ClickTarget::ModalBackdrop),
        PageEvent::KeyDown(Key::Escape),
    ];

    for closer in closers {
        let mut router = page(0);
        let mut surface = RecordingSurface::new();

        click(&mut router, ClickTarget::ModalOpen);
        router.render(&mut surface);
        assert_eq!(surface.focused(), Some(NodeRef::ModalFirstField));
        assert!(surface.has_class(NodeRef::ModalRoot, "active"));

        click(&mut router, ClickTarget::ModalContent);
        router.render(&mut surface);
        assert!(router.snapshot().modal_active, "content click closed the modal");

        router.dispatch(closer);
        router.render(&mut surface);
        assert!(!router.snapshot().modal_active, "{closer:?} did not close");
        assert_eq!(surface.focused(), Some(NodeRef::ModalOpener), "{closer:?}");
        assert_eq!(surface.attribute(NodeRef::ModalRoot, ARIA_HIDDEN), Some("true"));
    }
}

#[test]
fn counter_animates_to_target_and_stops() {
    let mut board = CounterBoard::new([parse_target(Some("150"))], &LandingConfig::default(), false);
    let mut surface = RecordingSurface::new();

    assert_eq!(board.observe(0, 0.5, 1_000.0), Trigger::Animate);
    board.project(&mut surface);

    let mut now = 1_000.0;
    while board.tick(0, now) {
        board.project_one(0, &mut surface);
        now += 16.0;
    }
    board.project_one(0, &mut surface);
    assert_eq!(surface.text(NodeRef::Counter(0)), Some("150"));
    assert!(surface.text_history(NodeRef::Counter(0)).len() > 2);

    let frames = surface.text_history(NodeRef::Counter(0)).len();
    assert!(!board.tick(0, now + 500.0));
    assert_eq!(board.observe(0, 1.0, now + 600.0), Trigger::Ignored);
    board.project(&mut surface);
    assert_eq!(surface.text(NodeRef::Counter(0)), Some("150"));
    assert_eq!(surface.text_history(NodeRef::Counter(0)).len(), frames);
}

#[test]
fn reduced_motion_sets_final_value_at_once() {
    let mut board = CounterBoard::new([parse_target(Some("150"))], &LandingConfig::default(), true);
    let mut surface = RecordingSurface::new();

    assert_eq!(board.observe(0, 0.4, 0.0), Trigger::Completed);
    board.project(&mut surface);
    assert!(!board.tick(0, 16.0));
    board.project(&mut surface);

    assert_eq!(surface.text_history(NodeRef::Counter(0)), ["150"]);
}

#[test]
fn message_counter_tracks_value_length() {
    let mut form = ContactForm::new(&ContactConfig::default());
    let mut surface = RecordingSurface::new();

    // Prefilled before any input event.
    form.sync_message("السلام عليكم");
    form.project(&mut surface);
    assert_eq!(surface.text(NodeRef::MessageCount), Some("12"));

    form.sync_message("السلام عليكم ورحمة الله");
    form.project(&mut surface);
    assert_eq!(surface.text(NodeRef::MessageCount), Some("23"));
}

#[test]
fn faq_keeps_latest_open() {
    let mut accordion = Accordion::new([false, false, false]);
    let mut surface = RecordingSurface::new();

    accordion.on_toggle(0, true);
    accordion.project(&mut surface);
    accordion.on_toggle(2, true);
    accordion.project(&mut surface);
    // The browser reports the forced close afterwards.
    accordion.on_toggle(0, false);

    assert_eq!(accordion.open_indices(), vec![2]);
    assert!(!surface.has_attribute(NodeRef::Disclosure(0), "open"));
    assert!(surface.has_attribute(NodeRef::Disclosure(2), "open"));
}

#[test]
fn reduced_motion_renders_target_verbatim() {
    let targets = ["2.5", "0x10", "1e20"].map(|raw| parse_target(Some(raw)));
    let mut board = CounterBoard::new(targets, &LandingConfig::default(), true);
    let mut surface = RecordingSurface::new();

    for index in 0..board.len() {
        assert_eq!(board.observe(index, 1.0, 0.0), Trigger::Completed);
    }
    board.project(&mut surface);

    assert_eq!(surface.text(NodeRef::Counter(0)), Some("2.5"));
    assert_eq!(surface.text(NodeRef::Counter(1)), Some("16"));
    assert_eq!(surface.text(NodeRef::Counter(2)), Some("100000000000000000000"));
}

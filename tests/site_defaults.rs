use anyhow::Result;
use thqaf::widgets::elements::{DropdownManager, LiveClock, LoginModal, MobileMenu};
use thqaf::widgets::{ClickTarget, PageEvent};
use thqaf::{PageRouter, RecordingSurface, SiteConfig};

#[test]
fn inline_config_overrides_defaults() -> Result<()> {
    let config = SiteConfig::from_toml_str(
        r#"
        [clock]
        interval_ms = 500

        [dropdown]
        open_class = "shown"
        "#,
    )?;
    assert_eq!(config.clock.interval_ms, 500);
    assert_eq!(config.dropdown.open_class, "shown");
    assert_eq!(config.modal.root_id, SiteConfig::default().modal.root_id);

    let clock = LiveClock::new(&config.clock);
    assert_eq!(clock.interval().as_millis(), 500);
    Ok(())
}

#[test]
fn default_page_routes_end_to_end() -> Result<()> {
    let config = SiteConfig::default();
    let mut router = PageRouter::new(
        DropdownManager::new(2, config.dropdown.open_class.clone()),
        Some(MobileMenu::new(&config.mobile_menu)),
        Some(LoginModal::new(&config.modal)),
    );
    let mut surface = RecordingSurface::new();

    router.dispatch(PageEvent::Click(ClickTarget::ModalOpen));
    router.render(&mut surface);
    assert!(router.snapshot().modal_active);

    router.dispatch(PageEvent::Click(ClickTarget::ModalBackdrop));
    router.render(&mut surface);
    assert!(!router.snapshot().modal_active);
    Ok(())
}

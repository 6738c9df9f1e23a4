/// Example program to print the effective widget configuration
///
/// Run with: cargo run -p thqaf-config --example print_config [path/to/thqaf.toml]

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "thqaf.toml".to_string());
    let config = thqaf_config::SiteConfig::load_or_default(&path);

    println!("=== Site Widget Configuration ({path}) ===\n");

    println!("Clock:");
    println!("  Element: #{}", config.clock.element_id);
    println!("  Interval: {} ms", config.clock.interval_ms);
    println!("  UTC offset: {} min", config.clock.utc_offset_minutes);
    println!("  Digits: {:?}", config.clock.digits);
    println!();

    println!("Dropdowns: {}", config.dropdown.container_selector);
    println!("Mobile menu: #{} -> #{}", config.mobile_menu.toggle_id, config.mobile_menu.panel_id);
    println!("Modal: #{} (opened by #{})", config.modal.root_id, config.modal.open_id);
    println!("Landing counters: {} over {} ms", config.landing.counter_selector, config.landing.duration_ms);
    println!();

    match config.to_toml_string() {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{toml_str}");
        }
        Err(e) => eprintln!("Failed to serialize config: {e}"),
    }
}

//! Mobile Menu Walkthrough
//!
//! This example drives a site through a typical phone session.
//!
//! Key concepts:
//! - Opening the menu locks document scroll
//! - Accordion sections expand one at a time
//! - Selecting a leaf navigates, closes the menu and releases the lock
//! - Map markers toggle on tap
//!
//! Run with: RUST_LOG=waymark=debug cargo run --example mobile_menu

use tracing_subscriber::EnvFilter;
use waymark::builder::SiteBuilder;
use waymark::effects::MemoryHost;
use waymark::{MarkerId, Page};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Mobile Menu Walkthrough ===\n");

    let host = MemoryHost::new();
    let mut site = SiteBuilder::new()
        .host(host.clone())
        .validate_catalog(true)
        .build()?;

    println!("Initial: {:?}\n", site.snapshot());

    site.open_menu().await?;
    println!("Menu open, scroll locked: {}", host.is_scroll_locked());

    for section in ["Corporate", "Projects"] {
        let snapshot = site.toggle_section(section).await?;
        println!("Expanded: {:?}", snapshot.expanded_section);
    }

    let snapshot = site.select_leaf(Page::ProjectsW2).await?;
    println!(
        "\nSelected {} -> view {:?}, menu open: {}, scroll locked: {}",
        snapshot.page,
        snapshot.view,
        snapshot.menu_open,
        host.is_scroll_locked()
    );

    site.tap_marker(MarkerId::new("z1")).await?;
    if let Some(panel) = site.active_panel() {
        println!(
            "\nMarker panel at {:?}: [{}] {} - {}",
            panel.anchor, panel.badge, panel.title, panel.body
        );
    }

    println!("\nHost calls: {:?}", host.calls());
    println!("\n=== Example Complete ===");
    Ok(())
}

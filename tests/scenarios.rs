//! End-to-end interaction scenarios driven through the site shell.

use waymark::builder::SiteBuilder;
use waymark::catalog::{Catalog, EntryAction};
use waymark::config::SiteConfig;
use waymark::core::{select_view_slug, Action, ScrollBehavior, View};
use waymark::effects::{HostCall, MemoryHost, Site};
use waymark::{MarkerId, Page};

fn site() -> (Site<MemoryHost>, MemoryHost) {
    let host = MemoryHost::new();
    let site = SiteBuilder::new()
        .host(host.clone())
        .validate_catalog(true)
        .build()
        .unwrap();
    (site, host)
}

#[tokio::test]
async fn mobile_menu_walkthrough() {
    let (mut site, host) = site();

    let initial = site.snapshot();
    assert_eq!(initial.page, Page::Home);
    assert!(initial.active_marker.is_none());
    assert!(!initial.menu_open);

    let opened = site.open_menu().await.unwrap();
    assert!(opened.menu_open);
    assert!(host.is_scroll_locked());

    let expanded = site.toggle_section("Corporate").await.unwrap();
    assert_eq!(expanded.expanded_section.as_deref(), Some("Corporate"));

    let selected = site.select_leaf(Page::AboutUs).await.unwrap();
    assert_eq!(selected.page, Page::AboutUs);
    assert!(!selected.menu_open);
    assert!(selected.expanded_section.is_none());
    assert!(!host.is_scroll_locked());

    assert_eq!(
        host.calls(),
        vec![
            HostCall::Lock,
            HostCall::ScrollToTop(ScrollBehavior::Smooth),
            HostCall::Unlock,
        ]
    );
}

#[tokio::test]
async fn renavigating_same_page_scrolls_each_time() {
    let (mut site, host) = site();
    site.navigate(Page::Investors).await.unwrap();
    site.navigate(Page::Investors).await.unwrap();

    assert_eq!(host.scroll_resets(), 2);
    assert_eq!(site.state().navigation.visits_to(Page::Investors), 2);
}

#[tokio::test]
async fn rehovering_marker_keeps_it_active() {
    let (mut site, _host) = site();
    site.dispatch(Action::PointerEnterMarker(MarkerId::new("w2")))
        .await
        .unwrap();
    let snapshot = site
        .dispatch(Action::PointerEnterMarker(MarkerId::new("w2")))
        .await
        .unwrap();

    assert_eq!(snapshot.active_marker, Some(MarkerId::new("w2")));
    assert_eq!(site.active_panel().map(|p| p.body), Some("Ring of Fire Region"));
}

#[tokio::test]
async fn tapping_markers_switches_and_clears() {
    let (mut site, _host) = site();
    site.tap_marker(MarkerId::new("z3")).await.unwrap();
    site.tap_marker(MarkerId::new("z4")).await.unwrap();
    assert_eq!(site.active_panel().map(|p| p.title), Some("Herron Area"));

    let snapshot = site.tap_marker(MarkerId::new("z4")).await.unwrap();
    assert!(snapshot.active_marker.is_none());
    assert!(site.active_panel().is_none());
}

#[test]
fn corrupted_identifier_renders_home() {
    assert_eq!(select_view_slug("projects-w2\u{fffd}"), View::Home);
    assert_eq!(select_view_slug("javascript:alert(1)"), View::Home);
}

#[tokio::test]
async fn teardown_with_menu_open_unlocks_scroll() {
    let (mut site, host) = site();
    site.open_menu().await.unwrap();
    site.toggle_section("Projects").await.unwrap();
    assert!(host.is_scroll_locked());

    drop(site);

    assert!(!host.is_scroll_locked());
    assert_eq!(host.calls().last(), Some(&HostCall::Unlock));
}

#[tokio::test]
async fn desktop_and_mobile_routing_differ_for_sections() {
    let (mut site, host) = site();
    let corporate = site.catalog().section("Corporate").cloned().unwrap();

    assert_eq!(corporate.pointer_click(), EntryAction::None);
    assert!(site.click_entry(&corporate).await.is_none());

    site.dispatch(Action::HoverSection(Some("Corporate".into())))
        .await
        .unwrap();
    assert_eq!(site.hovered_submenu().map(|s| s.len()), Some(4));
    assert!(site.snapshot().expanded_section.is_none());

    site.open_menu().await.unwrap();
    let snapshot = site.touch_entry(&corporate).await.unwrap().unwrap();
    assert_eq!(snapshot.expanded_section.as_deref(), Some("Corporate"));
    assert_eq!(snapshot.hovered_section.as_deref(), Some("Corporate"));
    assert_eq!(host.scroll_resets(), 0);
}

#[tokio::test]
async fn instant_scroll_from_config() {
    let host = MemoryHost::new();
    let config = SiteConfig::from_json(r#"{ "scroll_behavior": "instant" }"#).unwrap();
    let mut site = SiteBuilder::new()
        .host(host.clone())
        .config(config)
        .catalog(Catalog::ptx())
        .build()
        .unwrap();

    site.navigate(Page::Contact).await.unwrap();
    assert_eq!(host.calls(), vec![HostCall::ScrollToTop(ScrollBehavior::Instant)]);
}

#[tokio::test]
async fn header_condenses_on_scroll() {
    let (mut site, _host) = site();
    let snapshot = site
        .dispatch(Action::ViewportScrolled { y: 240.0 })
        .await
        .unwrap();
    assert!(snapshot.header_condensed);
}

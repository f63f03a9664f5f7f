//! The site shell: composition root owning state, host and scroll lock.

use super::commands::{acquire_scroll_lock, scroll_to_top};
use super::host::{HostError, ScrollHost};
use super::lock::ScrollLock;
use crate::catalog::{Catalog, MarkerPanel, NavEntry};
use crate::config::SiteConfig;
use crate::core::{Action, Command, MarkerId, Page, Snapshot, UiState};
use stillwater::effect::Effect;
use tracing::{debug, error, info};

/// Owns the interaction state of one session and performs its effects.
///
/// The presentation layer reads [`Snapshot`]s and dispatches [`Action`]s;
/// it never mutates state directly. Dropping the site releases the scroll
/// lock if the mobile menu is still open.
pub struct Site<H: ScrollHost> {
    state: UiState,
    config: SiteConfig,
    catalog: Catalog,
    host: H,
    lock: Option<ScrollLock<H>>,
}

impl<H: ScrollHost> Site<H> {
    pub fn new(host: H, config: SiteConfig, catalog: Catalog) -> Self {
        Self {
            state: UiState::new(&config),
            config,
            catalog,
            host,
            lock: None,
        }
    }

    /// Apply an action and run the commands it produced.
    ///
    /// State changes are committed before any effect runs. Every command is
    /// attempted even if an earlier one fails, so a failed scroll reset never
    /// keeps the scroll lock from being released; the first failure is
    /// returned after all commands ran.
    pub async fn dispatch(&mut self, action: Action) -> Result<Snapshot, HostError> {
        debug!(?action, "dispatch");
        let commands = self.state.apply(action, &self.config);

        let mut first_failure = None;
        for command in commands {
            if let Err(err) = self.run(command).await {
                error!(%err, ?command, "host effect failed");
                first_failure.get_or_insert(err);
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(self.snapshot()),
        }
    }

    async fn run(&mut self, command: Command) -> Result<(), HostError> {
        match command {
            Command::ScrollToTop(behavior) => {
                scroll_to_top::<H>(behavior).run(&self.host).await
            }
            Command::LockScroll => {
                if self.lock.is_some() {
                    return Ok(());
                }
                match acquire_scroll_lock::<H>().run(&self.host).await {
                    Ok(lock) => {
                        self.lock = Some(lock);
                        Ok(())
                    }
                    Err(err) => {
                        // An open menu must always hold the lock.
                        let _ = self.state.overlay.close();
                        Err(err)
                    }
                }
            }
            Command::UnlockScroll => {
                if let Some(lock) = self.lock.take() {
                    lock.release();
                }
                Ok(())
            }
        }
    }

    pub async fn navigate(&mut self, page: Page) -> Result<Snapshot, HostError> {
        self.dispatch(Action::Navigate(page)).await
    }

    pub async fn open_menu(&mut self) -> Result<Snapshot, HostError> {
        self.dispatch(Action::OpenMenu).await
    }

    pub async fn close_menu(&mut self) -> Result<Snapshot, HostError> {
        self.dispatch(Action::CloseMenu).await
    }

    pub async fn toggle_section(&mut self, label: &str) -> Result<Snapshot, HostError> {
        self.dispatch(Action::ToggleSection(label.to_string())).await
    }

    pub async fn select_leaf(&mut self, page: Page) -> Result<Snapshot, HostError> {
        self.dispatch(Action::SelectLeaf(page)).await
    }

    pub async fn tap_marker(&mut self, marker: MarkerId) -> Result<Snapshot, HostError> {
        self.dispatch(Action::TapMarker(marker)).await
    }

    /// Desktop click on a menu entry. Returns `None` when the entry is inert.
    pub async fn click_entry(&mut self, entry: &NavEntry) -> Option<Result<Snapshot, HostError>> {
        let action = entry.pointer_click().into_pointer_action()?;
        Some(self.dispatch(action).await)
    }

    /// Tap on a menu entry inside the mobile menu.
    pub async fn touch_entry(&mut self, entry: &NavEntry) -> Option<Result<Snapshot, HostError>> {
        let action = entry.touch().into_mobile_action()?;
        Some(self.dispatch(action).await)
    }

    /// Activate a news item; items without an article page are inert.
    pub async fn open_news(&mut self, index: usize) -> Option<Result<Snapshot, HostError>> {
        let page = self.catalog.news.get(index)?.link()?;
        Some(self.navigate(page).await)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn holds_scroll_lock(&self) -> bool {
        self.lock.is_some()
    }

    /// Panel of the active marker, if any. At most one is ever returned.
    pub fn active_panel(&self) -> Option<MarkerPanel<'_>> {
        let id = self.state.overlay.active()?;
        self.catalog.panel_for(id)
    }

    /// Submenu revealed by desktop hover, if the hovered entry has one.
    pub fn hovered_submenu(&self) -> Option<&[NavEntry]> {
        let label = self.state.overlay.hovered()?;
        let entry = self.catalog.section(label)?;
        entry.has_submenu().then_some(entry.children())
    }

    /// Submenu expanded in the mobile accordion, if any.
    pub fn expanded_submenu(&self) -> Option<&[NavEntry]> {
        let label = self.state.overlay.expanded()?;
        let entry = self.catalog.section(label)?;
        entry.has_submenu().then_some(entry.children())
    }
}

impl<H: ScrollHost> Drop for Site<H> {
    fn drop(&mut self) {
        if let Some(lock) = self.lock.take() {
            info!("site torn down with menu open, releasing scroll lock");
            lock.release();
        }
    }
}

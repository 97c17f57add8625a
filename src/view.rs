use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Elements on the overlay surface that can receive a click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementId {
    /// Dimmed layer behind the overlay content
    OverlayBackground,
    /// Overlay content box or anything inside it
    OverlayContent,
    OverlayTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Loading,
    Populated,
    Error,
}

/// Modal surface for recipe detail
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    state: OverlayState,
    title: String,
    content: String,
}

impl Overlay {
    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state != OverlayState::Hidden
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Show the overlay in its loading state, from any state.
    pub fn open_loading(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
        self.state = OverlayState::Loading;
    }

    /// Returns false and leaves the overlay untouched unless it is loading.
    pub fn populate(&mut self, title: impl Into<String>, content: impl Into<String>) -> bool {
        self.settle(OverlayState::Populated, title.into(), content.into())
    }

    /// Returns false and leaves the overlay untouched unless it is loading.
    pub fn fail(&mut self, title: impl Into<String>, content: impl Into<String>) -> bool {
        self.settle(OverlayState::Error, title.into(), content.into())
    }

    fn settle(&mut self, state: OverlayState, title: String, content: String) -> bool {
        if self.state != OverlayState::Loading {
            return false;
        }
        self.title = title;
        self.content = content;
        self.state = state;
        true
    }

    pub fn close(&mut self) {
        self.state = OverlayState::Hidden;
    }

    /// Click on the overlay surface. Only the background layer itself dismisses.
    pub fn handle_click(&mut self, target: &ElementId) -> bool {
        if *target == ElementId::OverlayBackground {
            self.close();
            return true;
        }
        false
    }
}

/// In-memory document the components render into
#[derive(Debug, Clone)]
pub struct Page {
    pub search_input: String,
    pub popular_section_visible: bool,
    pub popular_results: String,
    pub results: String,
    /// Hidden when `None`
    pub message: Option<String>,
    pub loader_visible: bool,
    pub overlay: Overlay,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            popular_section_visible: true,
            popular_results: String::new(),
            results: String::new(),
            message: None,
            loader_visible: false,
            overlay: Overlay::default(),
        }
    }
}

impl Page {
    /// Shows a message and clears the result grid
    pub fn show_message(&mut self, text: impl Into<String>) {
        self.message = Some(text.into());
        self.results.clear();
    }
}

/// Shared handle to the page, injected into every component
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    page: Arc<Mutex<Page>>,
}

impl ViewContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the page. Never hold the guard across an await point.
    pub fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut Page) -> R) -> R {
        f(&mut *self.page.lock())
    }

    pub fn snapshot(&self) -> Page {
        self.page.lock().clone()
    }
}

/// Shows the loader for as long as it lives
pub struct LoaderGuard {
    view: ViewContext,
}

impl LoaderGuard {
    pub fn acquire(view: &ViewContext) -> Self {
        view.update(|page| page.loader_visible = true);
        Self { view: view.clone() }
    }
}

impl Drop for LoaderGuard {
    fn drop(&mut self) {
        self.view.update(|page| page.loader_visible = false);
    }
}

use log::debug;
use std::sync::Arc;

use crate::client::{MealDbClient, RecipeSource};
use crate::components::{
    DetailOutcome, DetailPresenter, PopularLoader, PopularOutcome, SearchController, SearchOutcome,
};
use crate::config::BrowserConfig;
use crate::view::{ElementId, ViewContext};
use crate::BrowserError;

/// User and page events the browser reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Document finished loading
    Loaded,
    /// Text typed into the search input
    SearchInput(String),
    SearchClicked,
    /// Key released in the search input
    SearchKeyUp(String),
    /// Summary card clicked, with its `data-id`
    CardClicked(String),
    CloseClicked,
    /// Click anywhere on the overlay surface
    OverlayClicked(ElementId),
}

/// What handling an event produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Popular(PopularOutcome),
    Search(SearchOutcome),
    Detail(DetailOutcome),
    OverlayClosed,
    Ignored,
}

/// Wires events to the popular loader, the search controller and the detail presenter
pub struct App {
    view: ViewContext,
    popular: PopularLoader,
    search: SearchController,
    detail: DetailPresenter,
}

impl App {
    pub fn new(source: Arc<dyn RecipeSource>, view: ViewContext, popular_ids: Vec<String>) -> Self {
        Self {
            popular: PopularLoader::new(source.clone(), view.clone(), popular_ids),
            search: SearchController::new(source.clone(), view.clone()),
            detail: DetailPresenter::new(source, view.clone()),
            view,
        }
    }

    /// Builds an app backed by the HTTP client described by `config`
    pub fn from_config(config: &BrowserConfig) -> Result<Self, BrowserError> {
        let client = MealDbClient::from_config(config)?;
        Ok(Self::new(
            Arc::new(client),
            ViewContext::new(),
            config.popular_ids.clone(),
        ))
    }

    pub fn view(&self) -> &ViewContext {
        &self.view
    }

    pub async fn dispatch(&self, event: UiEvent) -> EventOutcome {
        debug!("Dispatching {:?}", event);
        match event {
            UiEvent::Loaded => EventOutcome::Popular(self.popular.load().await),
            UiEvent::SearchInput(text) => {
                self.view.update(|page| page.search_input = text);
                EventOutcome::Ignored
            }
            UiEvent::SearchClicked => EventOutcome::Search(self.search.search().await),
            UiEvent::SearchKeyUp(key) if key == "Enter" => {
                EventOutcome::Search(self.search.search().await)
            }
            UiEvent::SearchKeyUp(_) => EventOutcome::Ignored,
            UiEvent::CardClicked(id) => EventOutcome::Detail(self.detail.show(&id).await),
            UiEvent::CloseClicked => {
                self.detail.close();
                EventOutcome::OverlayClosed
            }
            UiEvent::OverlayClicked(target) => {
                if self.view.update(|page| page.overlay.handle_click(&target)) {
                    EventOutcome::OverlayClosed
                } else {
                    EventOutcome::Ignored
                }
            }
        }
    }
}

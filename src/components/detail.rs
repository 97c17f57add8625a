use log::{debug, error};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::client::RecipeSource;
use crate::model::RecipeDetail;
use crate::render;
use crate::view::ViewContext;
use crate::BrowserError;

pub const DETAIL_FAILURE_MESSAGE: &str = "Could not load recipe details. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Shown(RecipeDetail),
    Failed,
    /// A newer request or a close happened before this one settled
    Discarded,
}

/// Fetches one recipe and presents it in the overlay
pub struct DetailPresenter {
    source: Arc<dyn RecipeSource>,
    view: ViewContext,
    generation: AtomicU64,
}

impl DetailPresenter {
    pub fn new(source: Arc<dyn RecipeSource>, view: ViewContext) -> Self {
        Self {
            source,
            view,
            generation: AtomicU64::new(0),
        }
    }

    /// Opens the overlay in its loading state, then fills it with the recipe
    /// or an error. Only the most recent request may settle the overlay.
    pub async fn show(&self, id: &str) -> DetailOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.view.update(|page| {
            page.overlay
                .open_loading(render::LOADING_TITLE, render::SPINNER)
        });

        let result = self.fetch(id).await;

        let mut page = self.view.page();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Discarding superseded detail response for {}", id);
            return DetailOutcome::Discarded;
        }

        match result {
            Ok(detail) => {
                if !page
                    .overlay
                    .populate(detail.name.clone(), render::recipe_detail(&detail))
                {
                    debug!("Overlay closed before recipe {} arrived", id);
                    return DetailOutcome::Discarded;
                }
                DetailOutcome::Shown(detail)
            }
            Err(e) => {
                error!("Error fetching recipe details for {}: {}", id, e);
                if !page.overlay.fail(
                    render::ERROR_TITLE,
                    render::failure_notice(DETAIL_FAILURE_MESSAGE),
                ) {
                    return DetailOutcome::Discarded;
                }
                DetailOutcome::Failed
            }
        }
    }

    async fn fetch(&self, id: &str) -> Result<RecipeDetail, BrowserError> {
        debug!("Looking up recipe {}", id);
        let record = self
            .source
            .lookup(id)
            .await?
            .ok_or_else(|| BrowserError::MissingRecord(id.to_string()))?;
        RecipeDetail::from_record(&record)
    }

    pub fn close(&self) {
        self.view.update(|page| page.overlay.close());
    }
}

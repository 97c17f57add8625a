use futures::future::try_join_all;
use log::{debug, error, info};
use std::sync::Arc;

use crate::client::RecipeSource;
use crate::model::RecipeSummary;
use crate::render;
use crate::view::ViewContext;
use crate::BrowserError;

pub const POPULAR_FAILURE_MESSAGE: &str = "Could not load popular recipes.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopularOutcome {
    Loaded(Vec<RecipeSummary>),
    Failed,
}

/// Fills the popular section from a fixed list of identifiers
pub struct PopularLoader {
    source: Arc<dyn RecipeSource>,
    view: ViewContext,
    ids: Vec<String>,
}

impl PopularLoader {
    pub fn new(source: Arc<dyn RecipeSource>, view: ViewContext, ids: Vec<String>) -> Self {
        Self { source, view, ids }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Renders skeletons, looks every identifier up concurrently and renders
    /// the cards in configured order once all have arrived. Any failure
    /// replaces the whole section with a single notice.
    pub async fn load(&self) -> PopularOutcome {
        let skeletons = render::skeleton_cards(self.ids.len());
        self.view.update(|page| page.popular_results = skeletons);

        match self.fetch_all().await {
            Ok(recipes) => {
                info!("Loaded {} popular recipes", recipes.len());
                let html = render::card_grid(&recipes);
                self.view.update(|page| page.popular_results = html);
                PopularOutcome::Loaded(recipes)
            }
            Err(e) => {
                error!("Error loading popular recipes: {}", e);
                let html = render::failure_notice(POPULAR_FAILURE_MESSAGE);
                self.view.update(|page| page.popular_results = html);
                PopularOutcome::Failed
            }
        }
    }

    async fn fetch_all(&self) -> Result<Vec<RecipeSummary>, BrowserError> {
        // try_join_all keeps results in input order and fails fast
        let lookups = self.ids.iter().map(|id| self.fetch_one(id));
        try_join_all(lookups).await
    }

    async fn fetch_one(&self, id: &str) -> Result<RecipeSummary, BrowserError> {
        debug!("Looking up popular recipe {}", id);
        let record = self
            .source
            .lookup(id)
            .await?
            .ok_or_else(|| BrowserError::MissingRecord(id.to_string()))?;
        RecipeSummary::from_record(&record)
    }
}

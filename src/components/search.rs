use log::{error, info, warn};
use std::sync::Arc;

use crate::client::RecipeSource;
use crate::model::RecipeSummary;
use crate::render;
use crate::view::{LoaderGuard, ViewContext};

pub const EMPTY_TERM_MESSAGE: &str = "Please enter an ingredient.";
pub const SEARCH_FAILURE_MESSAGE: &str = "An error occurred. Please try again later.";

pub fn no_results_message(term: &str) -> String {
    format!(
        "No recipes found for \"{}\". Please try another ingredient.",
        term
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank input, nothing was requested
    EmptyTerm,
    Results(Vec<RecipeSummary>),
    NoResults,
    Failed,
}

/// Resolves an ingredient term into a grid of recipe cards
pub struct SearchController {
    source: Arc<dyn RecipeSource>,
    view: ViewContext,
}

impl SearchController {
    pub fn new(source: Arc<dyn RecipeSource>, view: ViewContext) -> Self {
        Self { source, view }
    }

    /// Searches for the term currently typed into the search input.
    /// The popular section stays hidden afterwards.
    pub async fn search(&self) -> SearchOutcome {
        let input = self.view.page().search_input.clone();
        let term = input.trim();

        if term.is_empty() {
            self.view.update(|page| page.show_message(EMPTY_TERM_MESSAGE));
            return SearchOutcome::EmptyTerm;
        }

        self.view.update(|page| {
            page.results.clear();
            page.message = None;
            page.popular_section_visible = false;
        });
        let _loader = LoaderGuard::acquire(&self.view);

        let meals = match self.source.filter_by_ingredient(term).await {
            Ok(meals) => meals.unwrap_or_default(),
            Err(e) => {
                error!("Error fetching recipes for {:?}: {}", term, e);
                self.view.update(|page| page.show_message(SEARCH_FAILURE_MESSAGE));
                return SearchOutcome::Failed;
            }
        };

        let recipes: Vec<RecipeSummary> = meals
            .iter()
            .filter_map(|meal| match RecipeSummary::from_record(meal) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    warn!("Skipping search result: {}", e);
                    None
                }
            })
            .collect();

        if recipes.is_empty() {
            info!("No recipes found for {:?}", term);
            let message = no_results_message(term);
            self.view.update(|page| page.show_message(message));
            return SearchOutcome::NoResults;
        }

        info!("Found {} recipes for {:?}", recipes.len(), term);
        let html = render::card_grid(&recipes);
        self.view.update(|page| page.results = html);
        SearchOutcome::Results(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_results_message() {
        assert_eq!(
            no_results_message("dragonfruit"),
            "No recipes found for \"dragonfruit\". Please try another ingredient."
        );
    }
}

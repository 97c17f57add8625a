use async_trait::async_trait;
use mealdb_browser::components::{PopularLoader, PopularOutcome};
use mealdb_browser::{BrowserError, MealRecord, RecipeSource, ViewContext};
use mockito::Matcher;
use parking_lot::Mutex;
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Lookup source with per-id delays that records what the page looked like
/// while requests were in flight
struct DelayedSource {
    delays: HashMap<String, Duration>,
    failing: Option<String>,
    view: ViewContext,
    seen_while_loading: Mutex<Vec<String>>,
}

impl DelayedSource {
    fn new(view: ViewContext, delays: &[(&str, u64)]) -> Self {
        Self {
            delays: delays
                .iter()
                .map(|(id, ms)| (id.to_string(), Duration::from_millis(*ms)))
                .collect(),
            failing: None,
            view,
            seen_while_loading: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RecipeSource for DelayedSource {
    async fn filter_by_ingredient(
        &self,
        _ingredient: &str,
    ) -> Result<Option<Vec<MealRecord>>, BrowserError> {
        Ok(None)
    }

    async fn lookup(&self, id: &str) -> Result<Option<MealRecord>, BrowserError> {
        let snapshot = self.view.snapshot().popular_results;
        self.seen_while_loading.lock().push(snapshot);

        if let Some(delay) = self.delays.get(id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.as_deref() == Some(id) {
            return Err(BrowserError::MissingRecord(id.to_string()));
        }
        Ok(Some(MealRecord {
            id: Some(id.to_string()),
            name: Some(format!("Recipe {}", id)),
            thumbnail: Some(format!("https://img/{}.jpg", id)),
            ..Default::default()
        }))
    }
}

fn card_ids(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse("[data-id]").unwrap();
    fragment
        .select(&selector)
        .filter_map(|el| el.value().attr("data-id").map(String::from))
        .collect()
}

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[tokio::test]
async fn test_order_follows_configuration_not_completion() {
    let view = ViewContext::new();
    // first id finishes last
    let source = Arc::new(DelayedSource::new(
        view.clone(),
        &[("a", 60), ("b", 40), ("c", 20), ("d", 0)],
    ));
    let loader = PopularLoader::new(source.clone(), view.clone(), ids(&["a", "b", "c", "d"]));

    let outcome = loader.load().await;

    let PopularOutcome::Loaded(recipes) = outcome else {
        panic!("expected popular recipes to load");
    };
    let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Recipe a", "Recipe b", "Recipe c", "Recipe d"]);
    assert_eq!(card_ids(&view.snapshot().popular_results), ids(&["a", "b", "c", "d"]));
}

#[tokio::test]
async fn test_skeletons_render_before_any_response() {
    let view = ViewContext::new();
    let source = Arc::new(DelayedSource::new(view.clone(), &[("1", 10), ("2", 10)]));
    let loader = PopularLoader::new(source.clone(), view.clone(), ids(&["1", "2"]));

    loader.load().await;

    let seen = source.seen_while_loading.lock();
    assert_eq!(seen.len(), 2);
    for html in seen.iter() {
        assert_eq!(html.matches("animate-pulse").count(), 4);
        assert!(card_ids(html).is_empty());
    }
}

#[tokio::test]
async fn test_single_failure_fails_whole_list() {
    let view = ViewContext::new();
    let mut source = DelayedSource::new(view.clone(), &[("1", 0), ("2", 30), ("3", 0)]);
    source.failing = Some("3".to_string());
    let loader = PopularLoader::new(Arc::new(source), view.clone(), ids(&["1", "2", "3"]));

    assert_eq!(loader.load().await, PopularOutcome::Failed);

    let html = view.snapshot().popular_results;
    assert!(card_ids(&html).is_empty());
    assert_eq!(
        html,
        r#"<p class="text-center text-red-500 col-span-full">Could not load popular recipes.</p>"#
    );
}

#[tokio::test]
async fn test_unknown_id_over_http_fails_whole_list() {
    let mut server = mockito::Server::new_async().await;
    let _known = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52771".into()))
        .with_status(200)
        .with_body(
            r#"{"meals":[{"idMeal":"52771","strMeal":"Spicy Arrabiata Penne","strMealThumb":"https://img/penne.jpg"}]}"#,
        )
        .create_async()
        .await;
    let _unknown = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "0".into()))
        .with_status(200)
        .with_body(r#"{"meals":null}"#)
        .create_async()
        .await;

    let view = ViewContext::new();
    let client = mealdb_browser::MealDbClient::new(server.url(), None).unwrap();
    let loader = PopularLoader::new(Arc::new(client), view.clone(), ids(&["52771", "0"]));

    assert_eq!(loader.load().await, PopularOutcome::Failed);
    assert!(view
        .snapshot()
        .popular_results
        .contains("Could not load popular recipes."));
}

#[tokio::test]
async fn test_loaded_event_uses_default_ids() {
    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for id in ["52771", "52805", "52806", "52854", "52856"] {
        mocks.push(
            server
                .mock("GET", "/lookup.php")
                .match_query(Matcher::UrlEncoded("i".into(), id.into()))
                .with_status(200)
                .with_body(format!(
                    r#"{{"meals":[{{"idMeal":"{id}","strMeal":"Meal {id}","strMealThumb":"https://img/{id}.jpg"}}]}}"#
                ))
                .expect(1)
                .create_async()
                .await,
        );
    }

    let config = mealdb_browser::BrowserConfig {
        api_base_url: server.url(),
        ..Default::default()
    };
    let app = mealdb_browser::App::from_config(&config).unwrap();
    app.dispatch(mealdb_browser::UiEvent::Loaded).await;

    assert_eq!(
        card_ids(&app.view().snapshot().popular_results),
        ids(&["52771", "52805", "52806", "52854", "52856"])
    );
    for mock in mocks {
        mock.assert_async().await;
    }
}

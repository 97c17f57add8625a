pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod view;

pub use app::{App, EventOutcome, UiEvent};
pub use client::{MealDbClient, RecipeSource};
pub use config::BrowserConfig;
pub use error::BrowserError;
pub use model::{Ingredient, MealRecord, MealsResponse, RecipeDetail, RecipeSummary};
pub use view::{ElementId, Overlay, OverlayState, Page, ViewContext};

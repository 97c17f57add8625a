//! Markup for cards, the detail overlay and the page document.
//!
//! Every value taken from the service is escaped before it is interpolated.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::model::{Ingredient, RecipeDetail, RecipeSummary};
use crate::view::{OverlayState, Page};

pub const PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/600x400/e2e8f0/4a5568?text=Image+Not+Found";

pub const VIDEO_EMBED_BASE: &str = "https://www.youtube.com/embed/";

pub const LOADING_TITLE: &str = "Loading Recipe...";
pub const ERROR_TITLE: &str = "Error";

pub const SPINNER: &str = r#"<div class="text-center p-8"><div class="inline-block animate-spin rounded-full h-10 w-10 border-b-2 border-indigo-600"></div></div>"#;

const SKELETON_CARD: &str = r#"<div class="bg-white rounded-lg shadow-md p-4"><div class="bg-gray-200 h-40 rounded-md animate-pulse"></div><div class="mt-4 bg-gray-200 h-6 w-3/4 rounded animate-pulse"></div></div>"#;

const ONERROR: &str = "this.onerror=null;this.src='https://placehold.co/600x400/e2e8f0/4a5568?text=Image+Not+Found';";

fn image(src: &str, alt: &str, class: &str) -> String {
    let src = if src.trim().is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        src
    };
    format!(
        r#"<img src="{}" alt="{}" class="{}" onerror="{}">"#,
        attr(src),
        attr(alt),
        class,
        ONERROR
    )
}

/// Loading placeholders, one per expected card
pub fn skeleton_cards(count: usize) -> String {
    SKELETON_CARD.repeat(count)
}

pub fn summary_card(recipe: &RecipeSummary) -> String {
    format!(
        r#"<div class="recipe-card bg-white rounded-lg shadow-md overflow-hidden cursor-pointer" data-id="{}">{}<div class="p-4"><h3 class="font-semibold text-lg text-gray-800">{}</h3></div></div>"#,
        attr(&recipe.id),
        image(&recipe.thumbnail_url, &recipe.name, "w-full h-48 object-cover"),
        text(&recipe.name)
    )
}

/// Cards in the order given
pub fn card_grid(recipes: &[RecipeSummary]) -> String {
    recipes.iter().map(summary_card).collect()
}

/// Red notice spanning the whole grid
pub fn failure_notice(message: &str) -> String {
    format!(
        r#"<p class="text-center text-red-500 col-span-full">{}</p>"#,
        text(message)
    )
}

fn section_heading(title: &str) -> String {
    format!(
        r#"<h3 class="text-xl font-bold text-gray-800 mb-2 border-b pb-2">{}</h3>"#,
        title
    )
}

fn ingredient_item(ingredient: &Ingredient) -> String {
    format!(
        r#"<li class="flex items-center"><span class="font-semibold w-1/2">{}</span><span>{}</span></li>"#,
        text(&ingredient.name),
        text(&ingredient.measure)
    )
}

fn video_section(key: &str) -> String {
    format!(
        r#"<div class="mt-6">{}<div class="aspect-w-16 aspect-h-9"><iframe src="{}{}" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe></div></div>"#,
        section_heading("Video Recipe"),
        VIDEO_EMBED_BASE,
        attr(key)
    )
}

/// Body of the overlay for a loaded recipe
pub fn recipe_detail(detail: &RecipeDetail) -> String {
    let mut html = String::new();
    html.push_str(&image(
        &detail.thumbnail_url,
        &detail.name,
        "w-full h-64 object-cover rounded-md mb-4",
    ));

    html.push_str(r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-4">"#);
    for (heading, value) in [("Category", &detail.category), ("Area", &detail.area)] {
        html.push_str(&format!(
            r#"<div>{}<p class="text-gray-700">{}</p></div>"#,
            section_heading(heading),
            text(value)
        ));
    }
    html.push_str("</div>");

    html.push_str(&section_heading("Ingredients"));
    html.push_str(r#"<ul class="ingredients list-disc list-inside space-y-2 mb-4 pl-4">"#);
    for ingredient in &detail.ingredients {
        html.push_str(&ingredient_item(ingredient));
    }
    html.push_str("</ul>");

    html.push_str(&section_heading("Instructions"));
    html.push_str(&format!(
        r#"<p class="instructions text-gray-700 whitespace-pre-wrap">{}</p>"#,
        text(&detail.instructions)
    ));

    if let Some(key) = detail.video_key() {
        html.push_str(&video_section(key));
    }
    html
}

fn hidden(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " hidden"
    }
}

/// Full HTML document for the current page state
pub fn page_document(page: &Page) -> String {
    let message = page.message.as_deref().unwrap_or_default();
    let overlay = &page.overlay;
    let overlay_class = if overlay.state() == OverlayState::Hidden {
        " hidden"
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Recipe Finder</title>
</head>
<body>
<input id="searchInput" type="text" placeholder="Enter an ingredient" value="{search}">
<button id="searchBtn">Search</button>
<p id="message" class="text-center{message_hidden}">{message}</p>
<div id="loader" class="{loader_hidden}"></div>
<div id="recipeResults" class="grid">{results}</div>
<section id="popular-recipes" class="{popular_hidden}">
<h2>Popular Recipes</h2>
<div id="popularRecipeResults" class="grid">{popular}</div>
</section>
<div id="recipeModal" class="fixed inset-0{overlay_class}" data-state="{state:?}">
<div class="modal-content">
<button id="closeModal">&times;</button>
<h2 id="modalTitle">{title}</h2>
<div id="modalContent">{content}</div>
</div>
</div>
</body>
</html>
"#,
        search = attr(&page.search_input),
        message_hidden = hidden(page.message.is_some()),
        message = text(message),
        loader_hidden = hidden(page.loader_visible).trim_start(),
        results = page.results,
        popular_hidden = hidden(page.popular_section_visible).trim_start(),
        popular = page.popular_results,
        overlay_class = overlay_class,
        state = overlay.state(),
        title = text(overlay.title()),
        content = overlay.content(),
    )
}

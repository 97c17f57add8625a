pub mod detail;
pub mod popular;
pub mod search;

pub use detail::{DetailOutcome, DetailPresenter};
pub use popular::{PopularLoader, PopularOutcome};
pub use search::{SearchController, SearchOutcome};

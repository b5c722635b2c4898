pub mod profile_card;
pub mod repository_grid;
pub mod search_input;
pub mod ui_components;

pub use profile_card::ProfileCard;
pub use repository_grid::RepositoryGrid;
pub use search_input::SearchInput;
pub use ui_components::{ErrorMessage, LoadingSpinner};

mod controller;
mod errors;
mod intent;
mod opentelemetry;
mod page;
mod pagination;
mod params;
mod render;
mod state;

pub use controller::ViewController;
pub use errors::ViewError;
pub use intent::{Intent, Outcome};
pub use page::{ArticlesView, ArtworksView, Page, View};
pub use pagination::{Direction, PageMarker, Pagination};
pub use params::ViewParams;
pub use render::{PageWindow, Renderer, Screen};
pub use state::{NavigationSnapshot, NavigationState};

pub mod common;
pub mod detail;

pub use common::{DetailPresentation, PresentationContext, PresentationKind};
pub use detail::{DetailModal, DetailPage, DetailViewModel};

mod presentation;

pub use presentation::{DetailPresentation, PresentationContext, PresentationKind};

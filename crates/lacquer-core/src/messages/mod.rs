mod events;

pub use events::NavEvent;

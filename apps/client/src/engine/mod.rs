//! Reference rules engine: the model agents query and the controller that mutates it.

pub mod controller;
pub mod events;
pub mod model;

pub use controller::{Controller, HeartsController};
pub use events::{EventBus, EventKind, GameEvent, Subscription};
pub use model::HeartsModel;

// Service exports
pub mod api;
pub mod fixtures;
pub mod mock;

pub use api::{BackendError, SkillSwapApi};
pub use mock::{Endpoint, MockBackend};

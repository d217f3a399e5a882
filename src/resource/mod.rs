pub mod actions;
pub mod handle;
pub mod normalize;

pub use actions::{ActionDescriptor, ActionTable, Verb};
pub use handle::ResourceHandle;
pub use normalize::normalize;

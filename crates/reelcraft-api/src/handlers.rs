//! Request handlers.

pub mod content;
pub mod health;
pub mod video;

pub use content::*;
pub use health::*;
pub use video::*;

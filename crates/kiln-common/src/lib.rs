pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, KilnError};
pub use id::TextureId;
pub use types::Color;

pub type Result<T> = std::result::Result<T, KilnError>;

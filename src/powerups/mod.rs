//! Power-up catalog: ids, definitions and the registry.
//!
//! ## Key Types
//!
//! - `PowerUpId`: Closed set of power-up identifiers
//! - `PowerUpCategory`: Positive, Negative or Manipulative
//! - `EffectShape`: Effect type and optional point range
//! - `PowerUp`: Static definition
//! - `PowerUpRegistry`: Definition lookup

pub mod definition;
pub mod registry;

pub use definition::{EffectShape, EffectType, PowerUp, PowerUpCategory, PowerUpId};
pub use registry::PowerUpRegistry;

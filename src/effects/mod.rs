//! Effect system for power-up activations.
//!
//! - `PowerUpEffect`: Score delta or status on one team
//! - `StatusEffect`: Status with a remaining duration
//! - `targeting`: Ranking and random opponent selection
//! - `EffectResolver`: Computes and applies the effects of an activation
//!
//! ## Design Philosophy
//!
//! Resolution is a pure function of the power-up id, the activating team,
//! the roster and an injected random source. Nothing is written until the
//! engine calls `EffectResolver::apply`.

mod effect;
pub mod targeting;
mod resolver;

pub use effect::{EffectList, PowerUpEffect, StatusEffect, StatusKind};
pub use resolver::{EffectResolver, DEFAULT_RANGE, FLAT_AMOUNT};

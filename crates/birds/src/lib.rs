//! Bird/penguin and duck substitution samples.
//!
//! Flight is a separate capability ([`FlyingBird`]) rather than a method every
//! bird must implement. A penguin is a [`Bird`] but not a [`FlyingBird`], so
//! code that needs flight cannot be handed one in the first place. Ducks
//! follow the same idea for power: only a switched-on electric duck is a
//! [`Duck`].

pub mod bird;
pub mod duck;

pub use bird::{Bird, FlyingBird, Penguin, Sparrow, feed_all, launch_all};
pub use duck::{Duck, ElectricDuck, OrganicDuck, PoweredDuck, swim_all};

//! Bit-exact replica of the xorshift128 generator used by the game, for
//! replaying captured sequences and checking candidate seeds.
//!
//! The generator is a plain `Copy` value. Give every sequence (and every
//! search thread) its own [`XorShift128`]; nothing here synchronizes.

pub mod arng;
mod error;
pub mod state;
mod xorshift128;

pub use arng::Arng;
pub use error::ParseStateError;
pub use state::{pack32to64, unpack64to32};
pub use xorshift128::{XorShift128, XorShift128Seed};

//! Lightweight subsumption arbitration for reactive, tick-based agents.
//!
//! A subsumption stack is an ordered list of independent behavior layers.
//! Every tick each layer looks at the world and either proposes an output or
//! defers; the first layer that proposes something wins and everything below
//! it is never evaluated.
//!
//! - **No delta time**: Every evaluation completes immediately
//! - **No Running state**: Layers act or defer, nothing is resumed
//! - **No carried state**: Each tick is independent of the previous one
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Layer`]: Core trait for all behaviors
//! - [`Proposal`]: Act or Defer
//! - [`Stack`]: Priority-ordered arbitration, reporting an [`Outcome`]
//! - [`StackBuilder`], [`FnLayer`]: construction helpers

pub mod builder;
pub mod layer;
pub mod proposal;
pub mod stack;

// Re-export core types for ergonomic API
pub use builder::{StackBuilder, layer_fn};
pub use layer::{FnLayer, Layer};
pub use proposal::Proposal;
pub use stack::{Outcome, Stack};

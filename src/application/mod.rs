// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions the infrastructure layer implements
//! - [`swipe`]: The swipe controller owning the photo list and card state
//! - [`renderer`]: Generation-stamped resolution of the current card image
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`app`, `ui`) drives application services
//!
//! Nothing in this layer depends on Iced; side effects are returned as
//! values and executed by the presentation layer.

pub mod port;
pub mod renderer;
pub mod swipe;

pub use renderer::{ImageRenderer, RenderState, ResolveRequest};
pub use swipe::{Deferred, Effect, LoadPhase, SwipeController};

//! Progressive stroke drawing for vector paths.
//!
//! A [`PathController`] makes one path appear to draw itself by driving its stroke dash
//! offset, and interpolates a tree of caller-defined numbers ([`ValueTree`]) in lockstep,
//! handing both to a step callback on every frame.
//!
//! # Model
//!
//! - **Progress** is a fraction of the path, `0` undrawn and `1` fully drawn. Values outside
//!   `[0, 1]` over- or undershoot.
//! - **Runs** are created by [`PathController::animate`] and advanced by
//!   [`PathController::tick`] from the caller's frame loop. A controller holds at most one run;
//!   starting another or calling [`PathController::set`] cancels it.
//! - **The surface is the truth.** Other code may write the dash offset, so the controller
//!   reads it back from the [`RenderSurface`] whenever it stops or starts a run.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod path;

pub use animation::ease::{EASING_ALIASES, Ease, resolve_easing};
pub use animation::tween::{Tween, TweenSample};
pub use animation::value::{Lerp, TweenValue, ValueTree, interpolate};
pub use foundation::error::{DrawError, DrawResult};
pub use path::controller::{Completion, OFFSET_KEY, PathController, RunState, TickOutcome};
pub use path::offset::{offset_to_progress, progress_to_offset};
pub use path::options::{AnimateOptions, ControllerId, DrawOptions, Opaque, Reference, Step};
pub use path::surface::{RenderSurface, StrokePath, StrokeStyle};

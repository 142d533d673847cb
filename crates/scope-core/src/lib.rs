// File: crates/scope-core/src/lib.rs
// Summary: Core library entry point; exports the public API for the scope engine.

pub mod axis;
pub mod decimate;
pub mod error;
pub mod gesture;
mod layers;
mod render;
pub mod scope;
pub mod series;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::Axis;
pub use decimate::{decimate, decimate_signal, Trace};
pub use error::ScopeError;
pub use gesture::{Gesture, GestureSnapshot};
pub use scope::{FrameStats, Scope};
pub use series::{LineStyle, Series, SeriesData};
pub use text::TextShaper;
pub use theme::Theme;
pub use ticks::{nice_number, Tick};
pub use types::Bounds;

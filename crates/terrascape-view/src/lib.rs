//! Per-frame viewing state for the terrain sample: an explicit input-state
//! object fed by window events and a fly camera that consumes it.

pub mod camera;
pub mod input;

pub use camera::{Direction, FlyCamera};
pub use input::{InputEvent, InputState, KeyCode, MouseButton};

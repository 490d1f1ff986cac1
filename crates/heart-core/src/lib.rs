//! Platform-independent core of the heartbeat glyph: curve sampling, beat
//! clock, trail extraction, surface transform math and compositing against an
//! abstract 2D drawing context. The web front-end binds it to a canvas.

pub mod canvas;
pub mod clock;
pub mod color;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod curve;
pub mod frame;
pub mod scene;
pub mod surface;
pub mod trail;

pub use canvas::*;
pub use clock::*;
pub use color::*;
pub use compositor::*;
pub use config::*;
pub use curve::*;
pub use frame::*;
pub use scene::*;
pub use surface::*;
pub use trail::*;

//! Scroll choreography for the folio portfolio.
//!
//! Everything here is platform-free: the web front-end measures the DOM and
//! feeds geometry, intersection entries and frame ticks in, then writes the
//! resulting values back to element styles. The same types drive the native
//! preview and the host-side tests.

pub mod breakpoints;
pub mod constants;
pub mod error;
pub mod hero;
pub mod orbit;
pub mod region;
pub mod spring;
pub mod timeline;
pub mod tracker;
pub mod window;

pub use breakpoints::*;
pub use constants::*;
pub use error::ChoreoError;
pub use hero::*;
pub use orbit::*;
pub use region::*;
pub use spring::*;
pub use timeline::*;
pub use tracker::*;
pub use window::*;

//! Interchangeable implementations of the `lexu64` wire format.
//!
//! All three must produce identical bytes; they differ only in how they get
//! there.

mod reference;
mod shift;
mod width;

pub use reference::Reference;
pub use shift::Shift;
pub use width::Width;

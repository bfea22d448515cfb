#![doc(hidden)]

//! DaisyUI-flavoured component wrappers organised with Atomic Design layers.

pub mod foundations;

pub mod atoms;
pub mod molecules;
pub mod organisms;

pub use atoms::*;
pub use foundations::*;
pub use molecules::*;
pub use organisms::*;

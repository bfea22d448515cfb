pub(crate) mod grid;
pub(crate) mod shell;
pub(crate) mod toast;

pub mod daisy;

pub mod pointer;
pub mod submit;

pub use pointer::{wire_pointer_and_resize, InputWiring};
pub use submit::wire_submit;

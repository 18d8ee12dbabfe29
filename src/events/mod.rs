pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_flap_key;
pub use pointer::{wire_cut_line_handlers, PointerWiring};

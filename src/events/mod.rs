pub mod keyboard;
pub mod panel;
pub mod pointer;

pub use keyboard::wire_keyboard;
pub use panel::wire_panel;
pub use pointer::wire_pointer;

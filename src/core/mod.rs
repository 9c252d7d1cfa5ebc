pub mod controller;
pub mod input_adapter;
pub mod input_event;
pub mod input_state;
pub mod timer;

pub use controller::{Action, Controller, Key, KeyBindings};
pub use input_adapter::WinitInputAdapter;
pub use input_event::{InputEvent, PointerPosition};
pub use input_state::InputState;
pub use timer::TickCountdown;

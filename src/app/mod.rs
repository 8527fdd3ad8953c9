//! Application shell: state, events, rendering

mod app_events;
mod app_render;
mod app_state;
mod input_state;
mod mouse_click;

pub use app_state::{App, Focus};
pub use input_state::InputState;

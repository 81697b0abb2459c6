//! Text field widget - a decorated single-line input.

mod events;
mod props;
mod render;
mod state;

pub use props::{FieldSize, InputType, Variant};
pub use render::{clear_button_id, reveal_toggle_id};
pub use state::{ChangeEvent, ChangeHandler, TextField};

mod input;
mod submit_button;

pub use input::{InputKind, TextInput};
pub use submit_button::SubmitButtonWidget;

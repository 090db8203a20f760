//! Reusable UI components.

mod input_field;

pub use input_field::{input_field_height, render_input_field, InputFieldConfig};

//! Rendering of trees and runtime values.

mod tree;
mod value;

pub use tree::tree_to_string;
pub use value::{render_printed, render_value};

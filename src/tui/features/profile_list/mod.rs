//! Profile list key handling and rendering.

mod input;
mod render;

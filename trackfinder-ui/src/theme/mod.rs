//! Theme tokens shared by the view components

pub mod colors;
pub mod fonts;

pub use fonts::StyleFragment;

//! egui painters for the overview donut and the selection Sankey.

mod donut;
pub(crate) mod drawing;
mod sankey;

pub(crate) use donut::{draw_donut, draw_legend};
pub(crate) use sankey::draw_sankey;

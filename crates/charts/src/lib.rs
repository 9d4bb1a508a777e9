//! SVG rendering of a [`Chart`](ttev_analysis::Chart): EV bars on a fixed
//! primary axis and usage rates as a marked line on a secondary axis.
mod svg;

pub use svg::*;

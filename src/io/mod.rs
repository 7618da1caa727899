//! Input/output for sampled curves.
//!
//! CSV is the only persisted format: a two-column `x,y` table, one point per
//! row. SVG rendering is provided for looking at interactive frames.

mod csv;
mod svg;

pub use csv::{read_csv, write_csv, CsvError};
pub use svg::{polyline_to_svg_path, render_frame_svg, SvgStyle};

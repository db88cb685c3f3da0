pub use error::{FontError, FontResult};
pub use font::{FontFile, FontWriter, Glyph};
pub use geometry::{Outline, Point, Segment, Spline};
pub use raster::{Canvas, Rasterizer};

pub mod error;
pub mod farbfeld;
pub mod font;
pub mod geometry;
pub mod raster;
pub mod sfd;

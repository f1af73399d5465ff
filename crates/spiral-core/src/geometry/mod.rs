pub mod point;

pub use point::{Point2d, Point3d};

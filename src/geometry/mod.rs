mod line;
mod segment;

pub use line::Line;
pub use segment::Segment;

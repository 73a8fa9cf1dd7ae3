mod frame;
mod transform;

pub use frame::LocalFrame;
pub use transform::{to_geo, to_local};

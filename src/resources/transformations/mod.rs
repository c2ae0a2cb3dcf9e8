mod frames;
mod traits;

pub use frames::{BodyNedDcm, EulerAngles, Frame};
pub use traits::FrameTransform;

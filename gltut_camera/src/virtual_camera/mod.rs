pub mod camera;
pub mod input;
pub mod projection;

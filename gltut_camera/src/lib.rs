//! Camera math for the tutorial programs. Nothing in here touches a window or a GL context, so
//! the host binary owns all of that and this crate can be tested anywhere.

pub mod virtual_camera;

pub use virtual_camera::{
    camera::{view_matrix, VirtualCamera},
    input::CameraInput,
    projection::{perspective_projection, Projection},
};

//! Everything that talks to OpenGL.
//!
//! The shader pipeline ([`shader`], [`introspect`], [`context_info`]) is written against the
//! [`ShaderDriver`](driver::ShaderDriver) trait. Buffers, vertex arrays and frame state live in
//! [`opengl`] and call `gl` directly.

pub mod context_info;
pub mod driver;
pub mod introspect;
pub mod opengl;
pub mod shader;
pub mod utils;

#[cfg(test)]
pub mod mock;

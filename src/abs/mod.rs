//! This module contains the thin OpenGL wrappers the demo is built on:
//! application setup, shader management and mesh handling.

pub mod app;
pub mod mesh;
pub mod shader;

pub use app::*;
pub use mesh::*;
pub use shader::*;

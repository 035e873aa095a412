//! Thin OpenGL backend shared by the demos: a GLFW window with a 3.3 core
//! context, shader programs, textures and vertex data upload.

pub mod error;
pub mod glutils;
pub mod math;
pub mod mesh;
pub mod shaders;
pub mod system;
pub mod texture;

pub use error::{Error, Result};

// src/math/mod.rs
#![allow(clippy::module_name_repetitions)] // Common in math modules

pub mod vec3d;

pub use vec3d::{vec3d_to_vertex, vertex_to_vec3d};

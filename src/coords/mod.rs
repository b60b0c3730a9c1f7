// src/coords/mod.rs
#![allow(clippy::module_name_repetitions)]

pub mod face_uv;
pub(crate) mod hilbert;

pub use face_uv::{face_uv_to_xyz, st_to_uv, uv_to_st, xyz_to_face_uv};

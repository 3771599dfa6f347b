//! Spatial storage: the toroidal cell grid and its generation buffers.

pub mod grid;

//! Geometric post-transforms applied to generated symbol paths.

pub mod affine;

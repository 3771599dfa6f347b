//! Domain logic: grid configuration, the transition rule and patterns.

pub mod config;
pub mod rules;
pub mod patterns;

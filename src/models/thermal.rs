//! Thermal systems models.

pub mod crossflow;

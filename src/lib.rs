//! roirings - Convert ROI polygon annotations into hollow ring and stem marker polygons

pub mod batch;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod output;
pub mod roi;

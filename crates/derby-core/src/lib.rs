//! Derby Core - Basic data structures for the enhancement pipeline
//!
//! This crate provides the fundamental data structures shared by every
//! stage of the pipeline:
//!
//! - [`ImageStore`] - The three-channel integer image, tagged with its
//!   current [`ColorSpace`]
//! - [`ChannelPlane`] - A single-channel integer grid used as scratch space
//!   and as the unit of per-channel filtering
//! - [`limits`] - The fixed capacity bounds every image must fit in
//!
//! Samples are plain `i32` values. An RGB store holds channel values that
//! are conceptually in `[0, 255]`; an HSV store holds the fixed-point
//! encoding produced by `derby-color`.

pub mod error;
pub mod image;
pub mod limits;
pub mod plane;

pub use error::{Error, Result};
pub use image::{Channel, ColorSpace, ImageStore, Triple};
pub use limits::check_dimensions;
pub use plane::ChannelPlane;

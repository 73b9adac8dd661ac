//! Bed entities.

pub mod model;

pub use model::{Bed, BedType, CreateBed, UpdateBed};

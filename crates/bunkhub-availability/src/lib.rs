//! # bunkhub-availability
//!
//! The availability engine: pure, synchronous predicates that decide
//! whether a bed, room, or building is eligible and free for a
//! requested stay period, given in-memory snapshots of the current
//! allocations.
//!
//! Every operation here is total. Malformed dates degrade to "no
//! overlap", missing references degrade to "unavailable", and occupancy
//! counts never go negative. Nothing in this crate performs I/O; the
//! correctness of an answer is only as good as the freshness of the
//! snapshot passed in, which is why the service layer re-validates
//! against the database before persisting an allocation.

pub mod allocation;
pub mod eligibility;
pub mod occupancy;
pub mod overlap;

pub use allocation::is_fully_allocated;
pub use eligibility::is_gender_eligible;
pub use occupancy::{RoomOccupancy, available_beds, room_occupancy};
pub use overlap::{dates_overlap, periods_overlap};

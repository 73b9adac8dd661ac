//! Booking entities: the booking record, its people, stay periods,
//! bed allocations, and the status state machine.

pub mod allocation;
pub mod model;
pub mod period;
pub mod person;
pub mod status;

pub use allocation::{Allocation, AllocationDraft, BedOccupancy};
pub use model::{Booking, BookingWithPeople, CreateBooking, CreateBookingPerson, UpdateBooking};
pub use period::StayPeriod;
pub use person::{BookingPerson, Gender, GenderCategory, MINOR_AGE_LIMIT};
pub use status::BookingStatus;

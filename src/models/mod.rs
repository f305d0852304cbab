//! Data models for the club API
//!
//! Typed request and response bodies exchanged with the lost-and-found
//! endpoints.

mod requests;
mod responses;

pub use requests::{ItemQuery, NewFoundItem, NewLostItem, NewPickupLog, PickerInfo};
pub use responses::{FoundItem, LostFoundStats, LostItem, Page, PickupLog, PotentialMatch};

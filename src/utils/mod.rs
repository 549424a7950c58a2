//! Utility modules for the localdate library.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Local-zone formatting, interval and conversion functions
//!
//! The functions here are thin wrappers: they bind the process's local zone and
//! delegate to [`crate::zone::ZoneContext`]. Use a context directly when the zone
//! has to be fixed, for example in tests.

pub mod datetime;

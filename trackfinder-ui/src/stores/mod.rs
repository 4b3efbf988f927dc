//! Store types for UI state management
//!
//! Hosts own these stores and pass read-only snapshots into the views.

pub mod track_details;

pub use track_details::*;

//! trackfinder-ui - Shared UI types and components for trackfinder
//!
//! Contains display types, stores, message lookup, theme tokens and the pure
//! view components used by the web host.

pub mod components;
pub mod display_types;
pub mod i18n;
pub mod routing;
pub mod stores;
pub mod theme;

pub use components::*;
pub use display_types::*;
pub use i18n::Intl;
pub use routing::{PathTrackId, QueryTrackId, TrackIdError, TrackIdSource};

//! Shared UI components

pub mod helpers;
pub mod music_card;
pub mod track_details;
pub mod utils;

pub use helpers::{HomeLink, PageContainer, Skeleton, Text};
pub use music_card::MusicCard;
pub use track_details::{
    DetailBlock, DetailField, DetailRow, FetchDeps, FetchTrigger, PageHead, PageMeta,
    TrackDetailsPage, TrackDetailsPlan, TrackDetailsView,
};
pub use utils::{format_duration, format_release_date};

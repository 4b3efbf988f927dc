//! Track details page: fetch trigger, render plan and views

mod fetch_trigger;
mod page;
mod plan;
mod view;

pub use fetch_trigger::{FetchDeps, FetchTrigger};
pub use page::TrackDetailsPage;
pub use plan::{DetailBlock, DetailField, PageMeta, TrackDetailsPlan};
pub use view::{DetailRow, PageHead, TrackDetailsView};

mod home;
mod track;

pub use home::Home;
pub use track::{TrackPage, TrackQueryPage};

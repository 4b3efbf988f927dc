//! Common helper UI components

mod home_link;
mod page_container;
mod skeleton;
mod text;

pub use home_link::HomeLink;
pub use page_container::PageContainer;
pub use skeleton::Skeleton;
pub use text::Text;

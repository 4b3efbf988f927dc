//! Palette used by the track pages

/// Accent for headings and card borders
pub const PRIMARY: &str = "#1db954";
/// Background of the details container
pub const PRIMARY_BACKGROUND: &str = "#fafafa";
/// Body text
pub const TEXT: &str = "#111111";
/// Secondary text (labels under the card title)
pub const SECONDARY_TEXT: &str = "#555555";

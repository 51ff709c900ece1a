//! Built-in README styles.
//!
//! - [`VisualStyle`] ("extra"): illustrated, SVG-heavy
//! - [`ClassicStyle`]: collapsible sections with stats cards
//! - [`AwesomeStyle`]: plain awesome-list markdown
//! - [`FlatStyle`]: sortable tables, one document per filter and sort mode

pub mod awesome;
pub mod classic;
pub mod flat;
pub mod shared;
pub mod visual;

pub use awesome::AwesomeStyle;
pub use classic::ClassicStyle;
pub use flat::{FlatCategory, FlatStyle, SortMode};
pub use visual::VisualStyle;

/*
 * svg/mod.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 */

//! SVG templates for the illustrated README styles.
//!
//! Every function here is pure: it takes display text and returns a complete
//! SVG document. Writing the results to disk is the job of
//! [`crate::asset_writer::AssetWriter`].

mod badges;
mod dividers;
mod headers;
mod toc;

pub use badges::{render_flat_category_badge_svg, render_flat_sort_badge_svg, render_resource_badge_svg};
pub use dividers::{desc_box_light_svg, entry_separator_svg, section_divider_light_svg, DescBoxPosition};
pub use headers::{category_header_light_svg, render_h2_svg, render_h3_svg};
pub use toc::{toc_header_light_svg, toc_row_light_svg, toc_row_svg, toc_sub_light_svg, toc_sub_svg};

/// Escape `&`, `<` and `>` for use in SVG text nodes.
pub(crate) fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Like [`escape_text`], also escaping `"` for attribute-safe output.
pub(crate) fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

/// Character count, matching how widths are estimated for display text.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_text("a & <b>"), "a &amp; &lt;b&gt;");
        assert_eq!(escape_attr("say \"hi\" & go"), "say &quot;hi&quot; &amp; go");
    }
}

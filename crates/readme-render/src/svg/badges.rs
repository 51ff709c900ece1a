//! Resource name badges and flat-list navigation badges.

use super::{char_len, escape_attr};

fn initials(display_name: &str) -> String {
    let words: Vec<&str> = display_name.split_whitespace().collect();
    if words.len() >= 2 {
        words[..2]
            .iter()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    } else {
        display_name.chars().take(2).flat_map(char::to_uppercase).collect()
    }
}

/// Theme-adaptive badge with an initials box, the resource name and an optional author.
pub fn render_resource_badge_svg(display_name: &str, author_name: &str) -> String {
    let initials = initials(display_name);
    let name_escaped = escape_attr(display_name);

    let name_width = char_len(display_name) * 10;
    let author_width = if author_name.is_empty() {
        0
    } else {
        char_len(author_name) * 7 + 35
    };
    let svg_width = (name_width + author_width + 70).clamp(220, 700);
    let name_end_x = 48 + name_width;

    let author_element = if author_name.is_empty() {
        String::new()
    } else {
        format!(
            "\n  <text class=\"author\" x=\"{}\" y=\"30\" font-family=\"system-ui, -apple-system, 'Helvetica Neue', sans-serif\" font-size=\"14\" font-weight=\"400\">by {}</text>",
            name_end_x + 10,
            escape_attr(author_name)
        )
    };
    let line_end = svg_width - 4;

    format!(
        r##"<svg width="{svg_width}" height="44" xmlns="http://www.w3.org/2000/svg">
  <style>
    @media (prefers-color-scheme: light) {{
      .line {{ stroke: #5c5247; }}
      .box {{ stroke: #5c5247; }}
      .initials {{ fill: #c96442; }}
      .name {{ fill: #3d3530; }}
      .author {{ fill: #5c5247; opacity: 0.7; }}
    }}
    @media (prefers-color-scheme: dark) {{
      .line {{ stroke: #888; }}
      .box {{ stroke: #888; }}
      .initials {{ fill: #ff6b4a; }}
      .name {{ fill: #e8e8e8; }}
      .author {{ fill: #aaa; opacity: 0.8; }}
    }}
  </style>

  <!-- Thin top line -->
  <line class="line" x1="4" y1="6" x2="{line_end}" y2="6" stroke-width="1.25" opacity="0.4"/>

  <!-- Initials box -->
  <rect class="box" x="4" y="12" width="32" height="26" fill="none" stroke-width="2.25" opacity="0.6"/>
  <text class="initials" x="20" y="30" font-family="'Courier New', Courier, monospace" font-size="14" font-weight="700" text-anchor="middle">{initials}</text>

  <!-- Resource name -->
  <text class="name" x="48" y="30" font-family="system-ui, -apple-system, 'Helvetica Neue', sans-serif" font-size="17" font-weight="600">{name_escaped}</text>{author_element}

  <!-- Bottom rule -->
  <line class="line" x1="48" y1="37" x2="{line_end}" y2="37" stroke-width="1.25" opacity="0.5"/>
</svg>"##
    )
}

/// 180x48 sort-mode badge for the flat list navigation.
pub fn render_flat_sort_badge_svg(display: &str, color: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="180" height="48" viewBox="0 0 180 48">
  <rect x="0" y="0" width="180" height="48" fill="#1a1a2e"/>
  <rect x="0" y="0" width="6" height="48" fill="{color}"/>
  <text x="93" y="32" font-family="'SF Mono', 'Consolas', monospace" font-size="18" font-weight="700" fill="#e2e8f0" text-anchor="middle" letter-spacing="1">{display}</text>
</svg>"##
    )
}

/// Category badge for the flat list navigation.
pub fn render_flat_category_badge_svg(display: &str, color: &str, width: usize) -> String {
    let text_x = width / 2 + 2;
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="28" viewBox="0 0 {width} 28">
  <rect x="0" y="0" width="{width}" height="28" fill="#27272a"/>
  <rect x="0" y="0" width="4" height="28" fill="{color}"/>
  <text x="{text_x}" y="19" font-family="'SF Mono', 'Consolas', monospace" font-size="12" font-weight="600" fill="#d4d4d8" text-anchor="middle">{display}</text>
</svg>"##
    )
}

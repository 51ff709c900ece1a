//! Section and subsection header SVGs.

use super::{char_len, escape_text};

/// Animated hero H2 header, optionally followed by an icon.
///
/// The view box widens for long titles so the centered text never clips.
pub fn render_h2_svg(text: &str, icon: &str) -> String {
    let display_text = if icon.is_empty() {
        text.to_string()
    } else {
        format!("{text} {icon}")
    };
    let text_escaped = escape_text(&display_text);

    let text_width = (char_len(text) * 22 + if icon.is_empty() { 0 } else { 50 }) as f64;
    let half_text = text_width / 2.0;
    let left_bound = (400.0 - half_text - 30.0).min(180.0) as i64;
    let right_bound = (400.0 + half_text + 30.0).max(620.0) as i64;
    let viewbox_width = right_bound - left_bound;

    format!(
        r##"<svg width="100%" height="100" viewBox="{left_bound} 0 {viewbox_width} 100" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <!-- Subtle glow for hero text - reduced blur for better readability -->
    <filter id="heroGlow" x="-10%" y="-10%" width="120%" height="120%">
      <feGaussianBlur stdDeviation="1" result="coloredBlur"/>
      <feMerge>
        <feMergeNode in="coloredBlur"/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>

    <!-- Hero gradient - brighter, more saturated colors for contrast -->
    <linearGradient id="heroGrad" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" stop-color="#FF8855" stop-opacity="1">
        <animate attributeName="stop-color" values="#FF8855;#FFAA77;#FF8855" dur="5s" repeatCount="indefinite"/>
      </stop>
      <stop offset="50%" stop-color="#FFAA77" stop-opacity="1"/>
      <stop offset="100%" stop-color="#FF8855" stop-opacity="1">
        <animate attributeName="stop-color" values="#FF8855;#FFCC99;#FF8855" dur="5s" repeatCount="indefinite"/>
      </stop>
    </linearGradient>

    <!-- Accent line gradient -->
    <linearGradient id="accentLine" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" stop-color="#FFB088" stop-opacity="0"/>
      <stop offset="50%" stop-color="#FF8855" stop-opacity="1">
        <animate attributeName="stop-opacity" values="0.8;1;0.8" dur="3s" repeatCount="indefinite"/>
      </stop>
      <stop offset="100%" stop-color="#FFB088" stop-opacity="0"/>
    </linearGradient>

    <!-- Radial glow background - more subtle -->
    <radialGradient id="bgGlow">
      <stop offset="0%" stop-color="#FF8C5A" stop-opacity="0.08">
        <animate attributeName="stop-opacity" values="0.05;0.12;0.05" dur="4s" repeatCount="indefinite"/>
      </stop>
      <stop offset="100%" stop-color="#FF8C5A" stop-opacity="0"/>
    </radialGradient>
  </defs>

  <!-- Background glow - more subtle -->
  <ellipse cx="400" cy="50" rx="300" ry="40" fill="url(#bgGlow)"/>

  <!-- Top accent line -->
  <line x1="200" y1="20" x2="600" y2="20" stroke="url(#accentLine)" stroke-width="2" stroke-linecap="round">
    <animate attributeName="stroke-width" values="2;2.5;2" dur="3s" repeatCount="indefinite"/>
  </line>

  <!-- Main hero text - larger, bolder, with subtle dark outline for contrast -->
  <text x="400" y="58" font-family="system-ui, -apple-system, sans-serif" font-size="38" font-weight="900" fill="url(#heroGrad)" text-anchor="middle" filter="url(#heroGlow)" letter-spacing="0.5" stroke="#221111" stroke-width="0.5" paint-order="stroke fill">
    {text_escaped}
  </text>

  <!-- Bottom accent line -->
  <line x1="200" y1="80" x2="600" y2="80" stroke="url(#accentLine)" stroke-width="2" stroke-linecap="round">
    <animate attributeName="stroke-width" values="2;2.5;2" dur="3s" begin="1.5s" repeatCount="indefinite"/>
  </line>

  <!-- Decorative corner elements -->
  <g opacity="0.6">
    <!-- Top left -->
    <path d="M 195,16 L 195,24 M 195,20 L 187,20" stroke="#FF8855" stroke-width="2" stroke-linecap="round">
      <animate attributeName="opacity" values="0.5;0.9;0.5" dur="3s" repeatCount="indefinite"/>
    </path>
    <!-- Top right -->
    <path d="M 605,16 L 605,24 M 605,20 L 613,20" stroke="#FF8855" stroke-width="2" stroke-linecap="round">
      <animate attributeName="opacity" values="0.5;0.9;0.5" dur="3s" begin="0.5s" repeatCount="indefinite"/>
    </path>
    <!-- Bottom left -->
    <path d="M 195,76 L 195,84 M 195,80 L 187,80" stroke="#FFAA77" stroke-width="2" stroke-linecap="round">
      <animate attributeName="opacity" values="0.5;0.9;0.5" dur="3s" begin="1s" repeatCount="indefinite"/>
    </path>
    <!-- Bottom right -->
    <path d="M 605,76 L 605,84 M 605,80 L 613,80" stroke="#FFAA77" stroke-width="2" stroke-linecap="round">
      <animate attributeName="opacity" values="0.5;0.9;0.5" dur="3s" begin="1.5s" repeatCount="indefinite"/>
    </path>
  </g>

  <!-- Floating accent particles - reduced opacity -->
  <g opacity="0.35">
    <circle cx="250" cy="35" r="2" fill="#FFCBA4">
      <animate attributeName="cy" values="35;30;35" dur="4s" repeatCount="indefinite"/>
      <animate attributeName="opacity" values="0;0.5;0" dur="4s" repeatCount="indefinite"/>
    </circle>
    <circle cx="550" cy="45" r="2.5" fill="#FFB088">
      <animate attributeName="cy" values="45;40;45" dur="4.5s" repeatCount="indefinite"/>
      <animate attributeName="opacity" values="0;0.6;0" dur="4.5s" repeatCount="indefinite"/>
    </circle>
    <circle cx="320" cy="68" r="1.5" fill="#FF9B70">
      <animate attributeName="cy" values="68;63;68" dur="3.5s" repeatCount="indefinite"/>
      <animate attributeName="opacity" values="0;0.4;0" dur="3.5s" repeatCount="indefinite"/>
    </circle>
  </g>
</svg>"##
    )
}

/// Minimal inline H3 header used for subsection titles.
pub fn render_h3_svg(text: &str) -> String {
    let text_escaped = escape_text(text);
    let total_width = char_len(text) * 10 + 50;

    format!(
        r##"<svg width="100%" height="36" viewBox="0 0 {total_width} 36" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <!-- Very subtle glow -->
    <filter id="minimalGlow">
      <feGaussianBlur stdDeviation="1" result="coloredBlur"/>
      <feMerge>
        <feMergeNode in="coloredBlur"/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>

    <!-- Simple gradient -->
    <linearGradient id="minimalGrad" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" stop-color="#FF6B35" stop-opacity="1"/>
      <stop offset="100%" stop-color="#8B5A3C" stop-opacity="1"/>
    </linearGradient>
  </defs>

  <!-- Left decorative element -->
  <g>
    <line x1="0" y1="18" x2="12" y2="18" stroke="#FF6B35" stroke-width="3" stroke-linecap="round" opacity="0.8">
      <animate attributeName="x2" values="12;16;12" dur="3s" repeatCount="indefinite"/>
      <animate attributeName="opacity" values="0.7;1;0.7" dur="3s" repeatCount="indefinite"/>
    </line>
    <circle cx="18" cy="18" r="2" fill="#FF8C5A" opacity="0.7">
      <animate attributeName="r" values="2;2.5;2" dur="3s" repeatCount="indefinite"/>
      <animate attributeName="opacity" values="0.6;0.9;0.6" dur="3s" repeatCount="indefinite"/>
    </circle>
  </g>

  <!-- Header text -->
  <text x="30" y="24" font-family="system-ui, -apple-system, sans-serif" font-size="18" font-weight="600" fill="url(#minimalGrad)" filter="url(#minimalGlow)">
    {text_escaped}
    <animate attributeName="opacity" values="0.93;1;0.93" dur="4s" repeatCount="indefinite"/>
  </text>
</svg>"##
    )
}

/// Light-mode category header with a boxed section number, e.g. `"03"`.
pub fn category_header_light_svg(title: &str, section_number: &str) -> String {
    let title_escaped = escape_text(title);
    let title_width = char_len(title) * 14;
    let line_end_x = (220 + title_width + 50).max(640);
    let dots: Vec<String> = [60, 45, 30, 15, 0]
        .iter()
        .map(|offset| format!(r#"    <circle cx="{}" cy="35" r="1"/>"#, line_end_x - offset))
        .collect();
    let dots = dots.join("\n");

    format!(
        r##"<svg width="100%" height="80" viewBox="150 0 500 80" xmlns="http://www.w3.org/2000/svg">
  <!--
    Vintage Technical Manual Style - Header (Auto-generated)
    Clean, authoritative, reference manual aesthetic
  -->

  <!-- Section number box -->
  <g>
    <rect x="160" y="22" width="36" height="36" fill="none" stroke="#5c5247" stroke-width="2" opacity="0.6"/>
    <text x="178" y="48"
          font-family="'Courier New', Courier, monospace"
          font-size="20"
          font-weight="700"
          fill="#c96442"
          text-anchor="middle">
      {section_number}
    </text>
  </g>

  <!-- Main title -->
  <text x="220" y="47"
        font-family="system-ui, -apple-system, 'Helvetica Neue', sans-serif"
        font-size="28"
        font-weight="600"
        fill="#3d3530"
        letter-spacing="0.5">
    {title_escaped}
  </text>

  <!-- Horizontal rule extending from title -->
  <line x1="220" y1="58" x2="{line_end_x}" y2="58" stroke="#5c5247" stroke-width="1.75" opacity="0.45"/>

  <!-- Reference dots pattern (like page markers) -->
  <g fill="#5c5247" opacity="0.3">
{dots}
  </g>

  <!-- Thin top line -->
  <line x1="160" y1="15" x2="{line_end_x}" y2="15" stroke="#5c5247" stroke-width="1.75" opacity="0.45"/>
</svg>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h2_viewbox_for_short_title() {
        let svg = render_h2_svg("Hooks", "🪝");
        assert!(svg.contains(r#"viewBox="180 0 440 100""#));
        assert!(svg.contains("Hooks 🪝"));
    }

    #[test]
    fn test_h2_viewbox_widens_for_long_title() {
        // 40 chars * 22 = 880, half 440: bounds -70 .. 870
        let title = "A".repeat(40);
        let svg = render_h2_svg(&title, "");
        assert!(svg.contains(r#"viewBox="-70 0 940 100""#), "{svg}");
    }

    #[test]
    fn test_h2_escapes_text() {
        let svg = render_h2_svg("Workflows & Guides", "");
        assert!(svg.contains("Workflows &amp; Guides"));
    }

    #[test]
    fn test_h3_width() {
        let svg = render_h3_svg("General");
        assert!(svg.contains(r#"viewBox="0 0 120 36""#));
    }

    #[test]
    fn test_category_header_light() {
        let svg = category_header_light_svg("Tooling", "03");
        assert!(svg.contains("      03\n"));
        assert!(svg.contains(r#"x2="640" y2="58""#));
        assert!(svg.contains(r#"<circle cx="580" cy="35" r="1"/>"#));
        assert!(svg.contains(r#"<circle cx="640" cy="35" r="1"/>"#));

        let long = category_header_light_svg(&"x".repeat(40), "01");
        assert!(long.contains(r#"x2="830" y2="58""#));
    }
}

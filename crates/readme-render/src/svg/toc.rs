//! Table-of-contents rows drawn as a directory listing.
//!
//! Dark rows imitate a green CRT terminal; light rows imitate the contents
//! page of a printed manual. All rows are 400x40 and anchored left so they
//! line up when stacked.

use super::escape_text;

/// Dark terminal row for a top-level category, e.g. `AGENT_SKILLS/`.
///
/// The description is kept in the markup as an XML comment.
pub fn toc_row_svg(directory_name: &str, description: &str) -> String {
    let dir_escaped = escape_text(directory_name);
    let desc_escaped = escape_text(description);

    format!(
        r##"<svg width="400" height="40" viewBox="0 0 400 40" xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMinYMid meet">
  <defs>
    <filter id="crtGlow">
      <feGaussianBlur stdDeviation="0.2" result="coloredBlur"/>
      <feMerge>
        <feMergeNode in="coloredBlur"/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>

    <pattern id="scanlines" x="0" y="0" width="100%" height="4" patternUnits="userSpaceOnUse">
      <rect x="0" y="0" width="100%" height="2" fill="#000000" opacity="0.25"/>
    </pattern>

    <linearGradient id="phosphor" x1="0%" y1="0%" x2="0%" y2="100%">
      <stop offset="0%" style="stop-color:#0f380f;stop-opacity:1"/>
      <stop offset="100%" style="stop-color:#0a2f0a;stop-opacity:1"/>
    </linearGradient>
  </defs>

  <!-- Background -->
  <rect width="400" height="40" fill="#1a1a1a"/>
  <rect x="7" y="0" width="393" height="40" fill="url(#phosphor)"/>
  <rect x="7" y="0" width="393" height="40" fill="url(#scanlines)"/>

  <!-- Hover highlight -->
  <rect x="7" y="0" width="393" height="40" fill="#33ff33" opacity="0">
    <animate attributeName="opacity" values="0;0.05;0" dur="2s" repeatCount="indefinite"/>
  </rect>

  <!-- Content -->
  <g filter="url(#crtGlow)">
    <text x="20" y="25" font-family="monospace" font-size="16" fill="#66ff66">
      drwxr-xr-x
    </text>
    <text x="140" y="25" font-family="monospace" font-size="16" fill="#33ff33" font-weight="bold">
      {dir_escaped}
      <animate attributeName="opacity" values="1;0.95;1" dur="0.1s" repeatCount="indefinite"/>
    </text>
    <!--
    <text x="400" y="25" font-family="monospace" font-size="14" fill="#449944" opacity="1">
      # {desc_escaped}
    </text>
    -->
  </g>
</svg>"##
    )
}

/// Light manual-page row for a top-level category.
pub fn toc_row_light_svg(directory_name: &str) -> String {
    let dir_escaped = escape_text(directory_name);

    format!(
        r##"<svg width="400" height="40" viewBox="0 0 400 40" xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMinYMid meet">
  <defs>
    <linearGradient id="paperBg" x1="0%" y1="0%" x2="0%" y2="100%">
      <stop offset="0%" style="stop-color:#faf8f3"/>
      <stop offset="100%" style="stop-color:#f5f0e6"/>
    </linearGradient>
    <pattern id="leaderDots" x="0" y="0" width="10" height="4" patternUnits="userSpaceOnUse">
      <circle cx="2" cy="2" r="0.8" fill="#8a7b6f" opacity="0.5"/>
    </pattern>
  </defs>

  <!-- Background -->
  <rect width="400" height="36" fill="url(#paperBg)"/>
  <line x1="2" y1="0" x2="2" y2="36" stroke="#c4baa8" stroke-width="1"/>
  <line x1="398" y1="0" x2="398" y2="36" stroke="#c4baa8" stroke-width="1"/>

  <!-- Section number -->
  <text x="32" y="24"
        font-family="'Courier New', Courier, monospace"
        font-size="14"
        font-weight="700"
        fill="#c96442"
        text-anchor="middle">
    01
  </text>

  <!-- Section title -->
  <text x="120" y="24"
        font-family="Georgia, 'Times New Roman', serif"
        font-size="14"
        fill="#3d3530">
    {dir_escaped}
  </text>

  <!-- Leader dots -->
  <rect x="210" y="20" width="140" height="4" fill="url(#leaderDots)"/>

  <!-- Page/section reference -->
  <text x="370" y="24"
        font-family="'Courier New', Courier, monospace"
        font-size="12"
        fill="#5c5247"
        text-anchor="end"
        opacity="0.7">
    §1
  </text>

  <!-- Bottom rule -->
  <line x1="20" y1="34" x2="380" y2="34" stroke="#c4baa8" stroke-width="0.5" opacity="0.3"/>
</svg>"##
    )
}

/// Dark terminal row for a subcategory, drawn as a `|-` branch.
pub fn toc_sub_svg(directory_name: &str) -> String {
    let dir_escaped = escape_text(directory_name);

    format!(
        r##"<svg height="40" width="400" viewBox="0 0 400 40" xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMinYMid meet">
  <defs>
    <filter id="crtGlow">
      <feGaussianBlur stdDeviation="0.5" result="coloredBlur"/>
      <feMerge>
        <feMergeNode in="coloredBlur"/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>

    <pattern id="scanlines" x="0" y="0" width="100%" height="4" patternUnits="userSpaceOnUse">
      <rect x="0" y="0" width="100%" height="2" fill="#000000" opacity="0.25"/>
    </pattern>

    <linearGradient id="phosphor" x1="0%" y1="0%" x2="0%" y2="100%">
      <stop offset="0%" style="stop-color:#0f380f;stop-opacity:1"/>
      <stop offset="100%" style="stop-color:#0a2f0a;stop-opacity:1"/>
    </linearGradient>
  </defs>

  <!-- Background -->
  <rect width="400" height="40" fill="#1a1a1a"/>
  <rect x="7" y="0" width="393" height="40" fill="url(#phosphor)"/>
  <rect x="7" y="0" width="393" height="40" fill="url(#scanlines)"/>

  <!-- Content -->
  <g filter="url(#crtGlow)">
    <text x="18" y="25" font-family="monospace" font-size="12" fill="#66ff66" opacity="0.8">
      |-
    </text>
    <text x="56" y="25" font-family="monospace" font-size="13" fill="#33ff33">
      {dir_escaped}
    </text>
  </g>
</svg>"##
    )
}

pub fn toc_sub_light_svg(directory_name: &str) -> String {
    let dir_escaped = escape_text(directory_name);

    format!(
        r##"<svg width="400" height="40" viewBox="0 0 400 40" xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMinYMid meet">
  <defs>
    <linearGradient id="paperBgSub" x1="0%" y1="0%" x2="0%" y2="100%">
      <stop offset="0%" style="stop-color:#fbfaf6"/>
      <stop offset="100%" style="stop-color:#f4efe5"/>
    </linearGradient>
  </defs>

  <rect width="400" height="36" fill="url(#paperBgSub)"/>
  <line x1="2" y1="0" x2="2" y2="36" stroke="#c4baa8" stroke-width="1"/>
  <line x1="398" y1="0" x2="398" y2="36" stroke="#c4baa8" stroke-width="1"/>

  <text x="22" y="24"
        font-family="'Courier New', Courier, monospace"
        font-size="12"
        fill="#c96442"
        opacity="0.8">
    |-
  </text>
  <text x="60" y="24"
        font-family="Georgia, 'Times New Roman', serif"
        font-size="13"
        fill="#3d3530">
    {dir_escaped}
  </text>

  <line x1="20" y1="33" x2="380" y2="33" stroke="#c4baa8" stroke-width="0.5" opacity="0.3"/>
</svg>"##
    )
}

/// Light-mode "CONTENTS" header shown above the directory listing.
pub fn toc_header_light_svg() -> &'static str {
    TOC_HEADER_LIGHT
}

const TOC_HEADER_LIGHT: &str = r##"<svg width="400" height="48" viewBox="0 0 400 48" xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMinYMid meet">
  <defs>
    <linearGradient id="tocHeaderBg" x1="0%" y1="0%" x2="0%" y2="100%">
      <stop offset="0%" style="stop-color:#faf8f3"/>
      <stop offset="100%" style="stop-color:#f3eee4"/>
    </linearGradient>
  </defs>

  <rect x="0.5" y="0.5" width="399" height="47" rx="3" ry="3" fill="url(#tocHeaderBg)" stroke="#c4baa8" stroke-width="1"/>

  <!-- Center title -->
  <text x="200" y="28"
        font-family="Georgia, 'Times New Roman', serif"
        font-size="17"
        font-weight="600"
        fill="#3d3530"
        text-anchor="middle"
        letter-spacing="2">
    CONTENTS
  </text>

  <!-- Decorative diamonds -->
  <g fill="#5c5247" opacity="0.65">
    <path d="M 118 24 L 124 18 L 130 24 L 124 30 Z"/>
    <path d="M 282 24 L 288 18 L 294 24 L 288 30 Z"/>
  </g>

  <!-- Light scan indicator -->
  <rect x="-40" y="2" width="3" height="44" fill="#d2c5b4" opacity="0.16">
    <animate attributeName="x" values="-40;420;420;-40" keyTimes="0;0.28;0.98;1" dur="7s" repeatCount="indefinite" />
  </rect>
</svg>"##;

//! Post-processing for model output: trim, then tag with an emoji marker.

struct MarkerRule {
    keywords: &'static [&'static str],
    marker: &'static str,
}

// Checked top to bottom; first hit wins. Matching is case-sensitive.
const MARKER_RULES: &[MarkerRule] = &[
    MarkerRule { keywords: &["கதை", "story", "ஒரு காலத்தில்"], marker: "📚" },
    MarkerRule { keywords: &["கலாச்சார", "பண்பாடு", "culture"], marker: "🏛️" },
    MarkerRule { keywords: &["இலக்கண", "grammar"], marker: "📖" },
    MarkerRule { keywords: &["விளக்க", "explain"], marker: "💡" },
];

pub const DEFAULT_MARKER: &str = "✨";

pub fn marker_for(text: &str) -> &'static str {
    MARKER_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| text.contains(k)))
        .map(|rule| rule.marker)
        .unwrap_or(DEFAULT_MARKER)
}

pub fn normalize(raw: &str) -> String {
    let cleaned = raw.trim();
    format!("{} {}", marker_for(cleaned), cleaned)
}

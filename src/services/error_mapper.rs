//! Maps raw upstream error text to the fixed set of Tamil messages shown to users.

pub const RATE_LIMIT_MESSAGE: &str =
    "மன்னிக்கவும், API வரம்பு முடிந்துவிட்டது. சிறிது நேரம் கழித்து முயற்சிக்கவும். 🙏";
pub const CONNECTIVITY_MESSAGE: &str =
    "இணையதள இணைப்பில் சிக்கல். தயவுசெய்து உங்கள் இணைப்பை சரிபார்க்கவும். 🌐";
pub const SERVICE_MESSAGE: &str =
    "API சேவையில் தற்காலிக சிக்கல். சிறிது நேரம் கழித்து முயற்சிக்கவும். ⚡";
pub const EMPTY_RESPONSE_MESSAGE: &str =
    "மன்னிக்கவும், பதில் உருவாக்க முடியவில்லை. மீண்டும் வேறு விதமாக கேட்கவும். 🤔";
const FALLBACK_PREFIX: &str = "எதிர்பாராத பிழை ஏற்பட்டது. தயவுசெய்து மீண்டும் முயற்சிக்கவும். 🙏";

const EXCERPT_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    RateLimit,
    Connectivity,
    Service,
    EmptyResponse,
    Unexpected,
}

// Plain substring checks on lowercased text, first hit wins. "limit" also
// matches unrelated words, and "api" matches any URL with "googleapis" in it.
const RULES: &[(&[&str], ErrorCategory)] = &[
    (&["quota", "limit"], ErrorCategory::RateLimit),
    (&["network", "connection"], ErrorCategory::Connectivity),
    (&["api"], ErrorCategory::Service),
    (&["empty response"], ErrorCategory::EmptyResponse),
];

pub fn classify(raw: &str) -> ErrorCategory {
    let lowered = raw.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or(ErrorCategory::Unexpected)
}

pub fn map_error(raw: &str) -> String {
    match classify(raw) {
        ErrorCategory::RateLimit => RATE_LIMIT_MESSAGE.to_string(),
        ErrorCategory::Connectivity => CONNECTIVITY_MESSAGE.to_string(),
        ErrorCategory::Service => SERVICE_MESSAGE.to_string(),
        ErrorCategory::EmptyResponse => EMPTY_RESPONSE_MESSAGE.to_string(),
        ErrorCategory::Unexpected => {
            let excerpt: String = raw.chars().take(EXCERPT_CHARS).collect();
            format!("{FALLBACK_PREFIX} ({excerpt}...)")
        }
    }
}

use crate::services::{
    gemini::{LanguageModel, ModelError},
    normalizer::normalize,
    prompt_router::route,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Generate,
    Story,
    Culture,
    Grammar,
    Explain,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Generate => "generate",
            RequestType::Story => "story",
            RequestType::Culture => "culture",
            RequestType::Grammar => "grammar",
            RequestType::Explain => "explain",
        }
    }
}

const TYPE_KEYWORDS: &[(RequestType, &[&str])] = &[
    (
        RequestType::Story,
        &["கதை", "story", "kathai", "சொல்லு", "tell me a story", "ஒரு கதை", "கேட்க விரும்புகிறேன்"],
    ),
    (
        RequestType::Culture,
        &["கலாச்சார", "culture", "பண்பாடு", "பாரம்பரியம", "tradition", "festival", "திருவிழா", "சடங்கு", "ritual"],
    ),
    (
        RequestType::Grammar,
        &["இலக்கண", "grammar", "மொழி", "language", "எழுத்து", "சொல்", "வாக்கியம", "sentence", "தமிழ் கற்க"],
    ),
    (
        RequestType::Explain,
        &["விளக்கு", "explain", "எப்படி", "how", "ஏன்", "why", "என்ன", "what", "யார்", "who"],
    ),
];

pub fn detect_request_type(msg: &str) -> RequestType {
    let msg_lower = msg.to_lowercase();

    TYPE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| msg_lower.contains(k)))
        .map(|(kind, _)| *kind)
        .unwrap_or(RequestType::Generate)
}

/// One model call for an already-validated message. No retry on failure.
pub async fn generate_reply(
    model: &dyn LanguageModel,
    message: &str,
    kind: &str,
) -> Result<String, ModelError> {
    let prompt = route(message, kind);
    let text = model.generate(&prompt).await?;
    Ok(normalize(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_type() {
        assert_eq!(detect_request_type("Tell me a STORY"), RequestType::Story);
        assert_eq!(detect_request_type("பொங்கல் திருவிழா"), RequestType::Culture);
        assert_eq!(detect_request_type("sentence structure"), RequestType::Grammar);
        assert_eq!(detect_request_type("Why is the sky blue"), RequestType::Explain);
        assert_eq!(detect_request_type("வணக்கம்"), RequestType::Generate);
    }

    #[test]
    fn story_wins_over_later_groups() {
        // "சொல்லு" is a story keyword and also contains the grammar keyword "சொல்".
        assert_eq!(detect_request_type("தமிழ் பற்றி சொல்லு"), RequestType::Story);
    }
}

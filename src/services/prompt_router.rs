//! System prompts and prompt assembly.
//!
//! Every outbound prompt is one of the templates below, followed by the
//! user's message and a closing instruction to answer in Tamil.

pub const BASE_KIND: &str = "base";

const BASE_PROMPT: &str = "நீங்கள் ஒரு தமிழ் AI உதவியாளர். உங்கள் பெயர் 'வணக்கம்'. நீங்கள் தமிழ் மொழி, கலாச்சாரம், இலக்கியம், வரலாறு மற்றும் பாரம்பரியம் பற்றிய நிபுணர்.

முக்கியமான வழிகாட்டுதல்கள்:
1. எப்போதும் தமிழில் பதில் அளிக்கவும்
2. பயனர் ஆங்கிலம், தமிழ் அல்லது தங்கிஷ் (Tanglish) மொழியில் கேட்டாலும், தமிழில் பதில் கொடுங்கள்
3. மிகவும் நட்புரீதியாக மற்றும் மரியாதையுடன் பேசுங்கள்
4. தமிழ் கலாச்சாரம் மற்றும் மரபுகளை பிரதிபலிக்கும் வகையில் பதில் அளிக்கவும்
5. உணர்ச்சிகரமான மற்றும் அர்த்தமுள்ள பதில்களை வழங்கவும்

நீங்கள் உதவ முடிந்த பகுதிகள்:
- தமிழ் மொழி கற்றல் மற்றும் இலக்கணம்
- தமிழ் இலக்கியம் மற்றும் கவிதைகள்
- தமிழ் கலாச்சாரம் மற்றும் பாரம்பரியம்
- தமிழ் வரலாறு மற்றும் பெருமைகள்
- கதைகள் மற்றும் புராணங்கள்
- தமிழ் பண்டிகைகள் மற்றும் சமயம்";

pub const STORY_PROMPT: &str = "நீங்கள் ஒரு சிறந்த தமிழ் கதை சொல்லும் நிபுணர். உங்கள் கதைகள்:
1. பாரம்பரிய தமிழ் கதை பாணியில் இருக்க வேண்டும்
2. தமிழ் கலாச்சார மதிப்புகளை பிரதிபலிக்க வேண்டும்
3. சுவாரசியமாக மற்றும் கல்வி பயனுள்ளதாக இருக்க வேண்டும்
4. உண்மையான தமிழ் பாணியில் \"ஒரு காலத்தில்...\" என்று தொடங்க வேண்டும்
5. நெறிமுறை மற்றும் நல்ல மதிப்புகளை கற்பிக்க வேண்டும்";

const CULTURE_PROMPT: &str = "நீங்கள் தமிழ் கலாச்சாரம் மற்றும் பாரம்பரியத்தின் நிபுணர். உங்கள் பதில்கள்:
1. தமிழ் கலாச்சாரத்தின் செழுமையை விளக்க வேண்டும்
2. வரலாற்று உண்மைகளுடன் இருக்க வேண்டும்
3. பண்டிகைகள், சடங்குகள், கலைகள் பற்றி விரிவாக கூற வேண்டும்
4. தமிழர்களின் பெருமை மற்றும் சாதனைகளை வெளிப்படுத்த வேண்டும்
5. பாரம்பரிய மற்றும் நவீன தமிழ் கலாச்சாரத்தை இணைக்க வேண்டும்";

const GRAMMAR_PROMPT: &str = "நீங்கள் தமிழ் இலக்கண நிபுணர். உங்கள் விளக்கங்கள்:
1. எளிமையான மற்றும் புரிந்துகொள்ளக்கூடிய முறையில் இருக்க வேண்டும்
2. உதாரணங்களுடன் விளக்க வேண்டும்
3. தொல்காப்பியம், நன்னூல் போன்ற பாரம்பரிய இலக்கண நூல்களை குறிப்பிட வேண்டும்
4. நடைமுறை பயன்பாட்டை காட்ட வேண்டும்
5. பிழைகளை சரிசெய்வதில் உதவ வேண்டும்";

const EXPLAIN_PROMPT: &str = "நீங்கள் ஒரு தமிழ் ஆசிரியர். உங்கள் விளக்கங்கள்:
1. படிப்படியாக மற்றும் தெளிவாக இருக்க வேண்டும்
2. எளிய தமிழில் கடினமான கருத்துக்களை விளக்க வேண்டும்
3. தமிழ் மொழியின் சொல்லாற்றலை பயன்படுத்த வேண்டும்
4. உதாரணங்கள் மற்றும் ஒப்புமைகளை பயன்படுத்த வேண்டும்
5. கற்பவரின் ஆர்வத்தை தூண்ட வேண்டும்";

/// `type` → template. "generate" is deliberately absent and uses `base`.
static TEMPLATES: &[(&str, &str)] = &[
    (BASE_KIND, BASE_PROMPT),
    ("story", STORY_PROMPT),
    ("culture", CULTURE_PROMPT),
    ("grammar", GRAMMAR_PROMPT),
    ("explain", EXPLAIN_PROMPT),
];

pub const MESSAGE_LABEL: &str = "பயனர் செய்தி:";
pub const CLOSING_INSTRUCTION: &str =
    "தயவுசெய்து மேலே உள்ள வழிகாட்டுதல்களின் படி தமிழில் பதில் அளிக்கவும்.";

pub fn template_for(kind: &str) -> &'static str {
    TEMPLATES
        .iter()
        .find(|(name, _)| *name == kind)
        .map(|(_, text)| *text)
        .unwrap_or(BASE_PROMPT)
}

pub fn has_template(kind: &str) -> bool {
    TEMPLATES.iter().any(|(name, _)| *name == kind)
}

pub fn route(message: &str, kind: &str) -> String {
    format!(
        "{}\n\n{} {}\n\n{}",
        template_for(kind),
        MESSAGE_LABEL,
        message,
        CLOSING_INSTRUCTION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_pick_their_template() {
        assert!(route("x", "story").starts_with(STORY_PROMPT));
        assert!(route("x", "culture").starts_with(CULTURE_PROMPT));
        assert!(route("x", "grammar").starts_with(GRAMMAR_PROMPT));
        assert!(route("x", "explain").starts_with(EXPLAIN_PROMPT));
    }

    #[test]
    fn unknown_types_fall_back_to_base() {
        for kind in ["generate", "", "STORY", "poetry", "base"] {
            let prompt = route("வணக்கம்", kind);
            assert!(prompt.starts_with(BASE_PROMPT), "kind {kind:?}");
            assert_eq!(prompt, route("வணக்கம்", kind));
        }
    }

    #[test]
    fn message_is_kept_verbatim() {
        let message = "  தமிழ் பற்றி சொல்லு {braces} \n";
        let prompt = route(message, "grammar");
        assert!(prompt.contains(message));
        assert!(prompt.ends_with(CLOSING_INSTRUCTION));
    }

    #[test]
    fn layout_is_template_label_message_closing() {
        let prompt = route("hi", "explain");
        let expected = format!("{EXPLAIN_PROMPT}\n\n{MESSAGE_LABEL} hi\n\n{CLOSING_INSTRUCTION}");
        assert_eq!(prompt, expected);
    }

    #[test]
    fn generate_has_no_template_of_its_own() {
        assert!(!has_template("generate"));
        assert!(has_template("story"));
    }
}

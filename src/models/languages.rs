// Language table and code normalization for the Google provider

use crate::error::ProviderError;
use phf::phf_map;

/// Pseudo-code asking the provider to detect the source language.
pub const AUTO: &str = "auto";

/// Supported language codes and their English names.
pub static LANGUAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "af" => "afrikaans",
    "sq" => "albanian",
    "am" => "amharic",
    "ar" => "arabic",
    "hy" => "armenian",
    "az" => "azerbaijani",
    "eu" => "basque",
    "be" => "belarusian",
    "bn" => "bengali",
    "bs" => "bosnian",
    "bg" => "bulgarian",
    "ca" => "catalan",
    "ceb" => "cebuano",
    "ny" => "chichewa",
    "zh-cn" => "chinese (simplified)",
    "zh-tw" => "chinese (traditional)",
    "co" => "corsican",
    "hr" => "croatian",
    "cs" => "czech",
    "da" => "danish",
    "nl" => "dutch",
    "en" => "english",
    "eo" => "esperanto",
    "et" => "estonian",
    "tl" => "filipino",
    "fi" => "finnish",
    "fr" => "french",
    "fy" => "frisian",
    "gl" => "galician",
    "ka" => "georgian",
    "de" => "german",
    "el" => "greek",
    "gu" => "gujarati",
    "ht" => "haitian creole",
    "ha" => "hausa",
    "haw" => "hawaiian",
    "iw" => "hebrew",
    "he" => "hebrew",
    "hi" => "hindi",
    "hmn" => "hmong",
    "hu" => "hungarian",
    "is" => "icelandic",
    "ig" => "igbo",
    "id" => "indonesian",
    "ga" => "irish",
    "it" => "italian",
    "ja" => "japanese",
    "jw" => "javanese",
    "kn" => "kannada",
    "kk" => "kazakh",
    "km" => "khmer",
    "ko" => "korean",
    "ku" => "kurdish (kurmanji)",
    "ky" => "kyrgyz",
    "lo" => "lao",
    "la" => "latin",
    "lv" => "latvian",
    "lt" => "lithuanian",
    "lb" => "luxembourgish",
    "mk" => "macedonian",
    "mg" => "malagasy",
    "ms" => "malay",
    "ml" => "malayalam",
    "mt" => "maltese",
    "mi" => "maori",
    "mr" => "marathi",
    "mn" => "mongolian",
    "my" => "myanmar (burmese)",
    "ne" => "nepali",
    "no" => "norwegian",
    "or" => "odia",
    "ps" => "pashto",
    "fa" => "persian",
    "pl" => "polish",
    "pt" => "portuguese",
    "pa" => "punjabi",
    "ro" => "romanian",
    "ru" => "russian",
    "sm" => "samoan",
    "gd" => "scots gaelic",
    "sr" => "serbian",
    "st" => "sesotho",
    "sn" => "shona",
    "sd" => "sindhi",
    "si" => "sinhala",
    "sk" => "slovak",
    "sl" => "slovenian",
    "so" => "somali",
    "es" => "spanish",
    "su" => "sundanese",
    "sw" => "swahili",
    "sv" => "swedish",
    "tg" => "tajik",
    "ta" => "tamil",
    "te" => "telugu",
    "th" => "thai",
    "tr" => "turkish",
    "uk" => "ukrainian",
    "ur" => "urdu",
    "ug" => "uyghur",
    "uz" => "uzbek",
    "vi" => "vietnamese",
    "cy" => "welsh",
    "xh" => "xhosa",
    "yi" => "yiddish",
    "yo" => "yoruba",
    "zu" => "zulu",
};

/// Reverse lookup by English name. `hebrew` resolves to the modern `he`.
static LANGUAGE_CODES: phf::Map<&'static str, &'static str> = phf_map! {
    "afrikaans" => "af", "albanian" => "sq", "amharic" => "am", "arabic" => "ar",
    "armenian" => "hy", "azerbaijani" => "az", "basque" => "eu", "belarusian" => "be",
    "bengali" => "bn", "bosnian" => "bs", "bulgarian" => "bg", "catalan" => "ca",
    "cebuano" => "ceb", "chichewa" => "ny", "chinese (simplified)" => "zh-cn",
    "chinese (traditional)" => "zh-tw", "corsican" => "co", "croatian" => "hr",
    "czech" => "cs", "danish" => "da", "dutch" => "nl", "english" => "en",
    "esperanto" => "eo", "estonian" => "et", "filipino" => "tl", "finnish" => "fi",
    "french" => "fr", "frisian" => "fy", "galician" => "gl", "georgian" => "ka",
    "german" => "de", "greek" => "el", "gujarati" => "gu", "haitian creole" => "ht",
    "hausa" => "ha", "hawaiian" => "haw", "hebrew" => "he", "hindi" => "hi",
    "hmong" => "hmn", "hungarian" => "hu", "icelandic" => "is", "igbo" => "ig",
    "indonesian" => "id", "irish" => "ga", "italian" => "it", "japanese" => "ja",
    "javanese" => "jw", "kannada" => "kn", "kazakh" => "kk", "khmer" => "km",
    "korean" => "ko", "kurdish (kurmanji)" => "ku", "kyrgyz" => "ky", "lao" => "lo",
    "latin" => "la", "latvian" => "lv", "lithuanian" => "lt", "luxembourgish" => "lb",
    "macedonian" => "mk", "malagasy" => "mg", "malay" => "ms", "malayalam" => "ml",
    "maltese" => "mt", "maori" => "mi", "marathi" => "mr", "mongolian" => "mn",
    "myanmar (burmese)" => "my", "nepali" => "ne", "norwegian" => "no", "odia" => "or",
    "pashto" => "ps", "persian" => "fa", "polish" => "pl", "portuguese" => "pt",
    "punjabi" => "pa", "romanian" => "ro", "russian" => "ru", "samoan" => "sm",
    "scots gaelic" => "gd", "serbian" => "sr", "sesotho" => "st", "shona" => "sn",
    "sindhi" => "sd", "sinhala" => "si", "slovak" => "sk", "slovenian" => "sl",
    "somali" => "so", "spanish" => "es", "sundanese" => "su", "swahili" => "sw",
    "swedish" => "sv", "tajik" => "tg", "tamil" => "ta", "telugu" => "te",
    "thai" => "th", "turkish" => "tr", "ukrainian" => "uk", "urdu" => "ur",
    "uyghur" => "ug", "uzbek" => "uz", "vietnamese" => "vi", "welsh" => "cy",
    "xhosa" => "xh", "yiddish" => "yi", "yoruba" => "yo", "zulu" => "zu",
};

/// Codes the provider accepts under a different spelling.
static SPECIAL_CASES: phf::Map<&'static str, &'static str> = phf_map! {
    "ee" => "et",
};

/// English name of a supported code.
pub fn name_of(code: &str) -> Option<&'static str> {
    LANGUAGES.get(code).copied()
}

/// Resolve a user-supplied language identifier to a code the provider accepts.
///
/// `field` names the request field for the error message (`"source"` or
/// `"target"`). `auto` is only accepted when `allow_auto` is set.
pub fn normalize(
    input: &str,
    field: &'static str,
    allow_auto: bool,
) -> Result<&'static str, ProviderError> {
    let lowered = input.trim().to_lowercase().replace('_', "-");

    if allow_auto && lowered == AUTO {
        return Ok(AUTO);
    }

    if let Some(code) = lookup(&lowered) {
        return Ok(code);
    }

    // Region-qualified code the table doesn't list (e.g. "en-us")
    if let Some((base, _region)) = lowered.split_once('-') {
        if let Some(code) = lookup(base) {
            return Ok(code);
        }
    }

    Err(ProviderError::UnsupportedLanguage {
        field,
        code: input.to_string(),
    })
}

fn lookup(candidate: &str) -> Option<&'static str> {
    if let Some((code, _)) = LANGUAGES.get_entry(candidate) {
        return Some(*code);
    }
    SPECIAL_CASES
        .get(candidate)
        .or_else(|| LANGUAGE_CODES.get(candidate))
        .copied()
}

// Language normalization properties

use proptest::prelude::*;
use translate_gateway::error::ProviderError;
use translate_gateway::models::languages::{self, LANGUAGES};

#[test]
fn test_every_listed_code_is_accepted_as_target() {
    for code in LANGUAGES.keys() {
        assert_eq!(languages::normalize(code, "target", false).unwrap(), *code);
    }
}

#[test]
fn test_every_listed_name_is_accepted() {
    for name in LANGUAGES.values() {
        let code = languages::normalize(name, "target", false).unwrap();
        assert_eq!(languages::name_of(code), Some(*name));
    }
}

#[test]
fn test_error_reports_original_input() {
    let err = languages::normalize(" Klingon ", "target", false).unwrap_err();
    assert_eq!(
        err,
        ProviderError::UnsupportedLanguage {
            field: "target",
            code: " Klingon ".to_string()
        }
    );
    assert_eq!(err.to_string(), "Unsupported target language:  Klingon ");
}

proptest! {
    #[test]
    fn normalization_ignores_case(idx in 0usize..LANGUAGES.len()) {
        let code = *LANGUAGES.keys().nth(idx).unwrap();
        let upper = code.to_uppercase();
        prop_assert_eq!(languages::normalize(&upper, "target", false).unwrap(), code);
    }

    #[test]
    fn normalized_codes_are_always_listed(input in "[a-zA-Z_-]{0,12}") {
        if let Ok(code) = languages::normalize(&input, "source", true) {
            prop_assert!(code == languages::AUTO || LANGUAGES.contains_key(code));
        }
    }

    #[test]
    fn region_suffix_falls_back_to_base(idx in 0usize..LANGUAGES.len(), region in "[A-Z]{2}") {
        let code = *LANGUAGES.keys().nth(idx).unwrap();
        prop_assume!(!code.contains('-'));
        let tagged = format!("{}_{}", code, region);
        let resolved = languages::normalize(&tagged, "target", false).unwrap();
        // Either the exact regional variant exists or the base code is used
        prop_assert!(resolved == code || LANGUAGES.contains_key(resolved));
    }
}

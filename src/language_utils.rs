use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for normalizing the ISO 639-3 (3-letter)
/// codes reported by the detection backend into the ISO 639-1 (2-letter)
/// codes the API exposes, and for resolving a code to its English name.
/// Normalize a 3-letter ISO 639-3 code to its 2-letter ISO 639-1 code
///
/// Returns None when the language has no 2-letter code; callers fall back
/// to the 3-letter code in that case.
pub fn normalize_to_part1(code: &str) -> Option<String> {
    let normalized = code.trim().to_lowercase();
    Language::from_639_3(&normalized)
        .and_then(|lang| lang.to_639_1())
        .map(|part1| part1.to_string())
}

/// Get the English language name from a 2- or 3-letter code
pub fn get_language_name(code: &str) -> Option<String> {
    let normalized = code.trim().to_lowercase();

    let lang = if normalized.len() == 2 {
        Language::from_639_1(&normalized)
    } else {
        Language::from_639_3(&normalized)
    };

    lang.map(|l| l.to_name().to_string())
}

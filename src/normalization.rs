use unicode_normalization::UnicodeNormalization;

/// Canonicalizes Kannada text before analysis: NFC composition, joiner removal,
/// trimming, and whitespace runs collapsed to a single space.
pub fn kannada_normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut final_str = String::with_capacity(text.len());
    let mut pending_space = false;

    // Joiners go before composition so the marks they separated can compose.
    let composed = text
        .chars()
        .filter(|&c| c != '\u{200C}' && c != '\u{200D}') // ZWNJ, ZWJ
        .nfc();

    for c in composed {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !final_str.is_empty() {
            final_str.push(' ');
        }
        pending_space = false;
        final_str.push(c);
    }

    final_str
}

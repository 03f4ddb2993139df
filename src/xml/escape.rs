//! Escape-character detection

/// Characters that cannot appear verbatim in XML attribute values
const ESCAPE_CHARACTERS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Whether `text` contains a character that needs escaping in XML
#[must_use]
pub fn contains_escape_characters(text: &str) -> bool {
    text.contains(ESCAPE_CHARACTERS)
}

//! Accent normalization
//!
//! Maps accented glyphs to their base letter so that `á`, `ã` and `a` are the same
//! letter for guessing. Every function here is total: characters the table does not
//! know pass through unchanged.

use super::Letter;

/// Base letter and the accented glyphs that normalize to it
const ACCENT_MAP: [(u8, &str); 7] = [
    (b'a', "áàâãä"),
    (b'e', "éèêë"),
    (b'i', "íìîï"),
    (b'o', "óòôõö"),
    (b'u', "úùûü"),
    (b'c', "ç"),
    (b'n', "ñ"),
];

/// Return the base letter for an accented or plain character
///
/// Unrecognized characters (digits, punctuation, unknown glyphs) are returned as-is.
///
/// # Examples
/// ```
/// use forca_solver::core::accent::normalize_letter;
///
/// assert_eq!(normalize_letter('ã'), 'a');
/// assert_eq!(normalize_letter('ç'), 'c');
/// assert_eq!(normalize_letter('b'), 'b');
/// assert_eq!(normalize_letter('?'), '?');
/// ```
#[must_use]
pub fn normalize_letter(ch: char) -> char {
    base_of(ch).map_or(ch, Letter::as_char)
}

/// Lowercase a word and normalize every character
///
/// # Examples
/// ```
/// use forca_solver::core::accent::normalize_word;
///
/// assert_eq!(normalize_word("Café"), "cafe");
/// assert_eq!(normalize_word("AÇÚCAR"), "acucar");
/// ```
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase().chars().map(normalize_letter).collect()
}

/// Base letter of an accented glyph, or `None` if the glyph is not in the map
#[must_use]
pub fn base_of(glyph: char) -> Option<Letter> {
    ACCENT_MAP
        .iter()
        .find(|(_, glyphs)| glyphs.contains(glyph))
        .and_then(|&(base, _)| Letter::from_byte(base))
}

/// Accented glyphs for a base letter (empty if the letter never carries an accent)
#[must_use]
pub fn variants(base: Letter) -> &'static str {
    ACCENT_MAP
        .iter()
        .find(|(b, _)| *b == base.byte())
        .map_or("", |&(_, glyphs)| glyphs)
}

/// Whether a base letter can carry an accent
#[inline]
#[must_use]
pub fn is_accentable(letter: Letter) -> bool {
    ACCENT_MAP.iter().any(|(b, _)| *b == letter.byte())
}

/// Whether a lowercase character is allowed in a secret word
#[must_use]
pub fn is_supported(ch: char) -> bool {
    ch.is_ascii_lowercase() || base_of(ch).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn every_glyph_maps_to_its_base() {
        for (base, glyphs) in ACCENT_MAP {
            for glyph in glyphs.chars() {
                assert_eq!(
                    normalize_letter(glyph),
                    base as char,
                    "glyph '{glyph}' should normalize to '{}'",
                    base as char
                );
            }
        }
    }

    #[test]
    fn plain_letters_are_identity() {
        for l in Letter::ALPHABET {
            assert_eq!(normalize_letter(l.as_char()), l.as_char());
        }
    }

    #[test]
    fn glyphs_have_exactly_one_base() {
        for (_, glyphs) in ACCENT_MAP {
            for glyph in glyphs.chars() {
                let owners = ACCENT_MAP
                    .iter()
                    .filter(|(_, g)| g.contains(glyph))
                    .count();
                assert_eq!(owners, 1, "glyph '{glyph}' appears under several bases");
            }
        }
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(normalize_letter('ß'), 'ß');
        assert_eq!(normalize_letter('-'), '-');
        assert_eq!(normalize_word("guarda-chuva"), "guarda-chuva");
    }

    #[test]
    fn normalize_word_lowercases_first() {
        assert_eq!(normalize_word("ÁRVORE"), "arvore");
        assert_eq!(normalize_word("Pão"), "pao");
    }

    #[test]
    fn accentable_letters() {
        let accentable: String = Letter::ALPHABET
            .into_iter()
            .filter(|&l| is_accentable(l))
            .map(Letter::as_char)
            .collect();
        assert_eq!(accentable, "aceinou");
    }

    #[test]
    fn variants_lookup() {
        assert_eq!(variants(letter('c')), "ç");
        assert_eq!(variants(letter('o')), "óòôõö");
        assert_eq!(variants(letter('b')), "");
    }

    #[test]
    fn supported_characters() {
        assert!(is_supported('é'));
        assert!(is_supported('k'));
        assert!(!is_supported('1'));
        assert!(!is_supported('ÿ'));
        assert!(!is_supported('A'));
    }
}

//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines, `#` comments and words with unsupported characters
/// are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use forca_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/palavras.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to `SecretWord` vector
///
/// # Examples
/// ```
/// use forca_solver::wordlists::loader::words_from_slice;
/// use forca_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<SecretWord> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| SecretWord::new(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["casa", "Pão", "ônibus"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].original(), "casa");
        assert_eq!(words[1].normalized(), "pao");
        assert_eq!(words[2].normalized(), "onibus");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["casa", "guarda-chuva", "", "sol", "42"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].original(), "casa");
        assert_eq!(words[1].original(), "sol");
    }

    #[test]
    fn load_from_file_skips_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# lista de teste").unwrap();
        writeln!(file, "maçã").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  lua  ").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].normalized(), "maca");
        assert_eq!(words[1].original(), "lua");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}

//! Text Sanitization
//!
//! Strips markup and formatting artifacts from Reddit text before it is
//! handed to a TTS provider.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};

lazy_static! {
    static ref URL_RE: Regex = Regex::new(
        r"((http|https)://)?[a-zA-Z0-9./?:@\-_=#]+\.([a-zA-Z]){2,6}([a-zA-Z0-9.&/?:@\-_=#])*"
    )
    .unwrap();
    // Apostrophes inside words ("can't") survive; quote marks next to
    // whitespace do not.
    static ref SYMBOL_RE: Regex =
        Regex::new(r#"\s['’]|['’]\s|[\^_~@!;#:\-%—“”‘"*/{}\[\]()\\|<>=]"#).unwrap();
    static ref THREAD_ID_RE: Regex = Regex::new(r"[^\w\s-]").unwrap();
    static ref SENTENCE_RE: Regex = Regex::new(r"[^.!?]*(?:[.!?]+|$)\s*").unwrap();
}

/// Clean text for speech: drop URLs and symbols, spell out `+` and `&`,
/// collapse whitespace.
pub fn sanitize_text(text: &str) -> String {
    let result = URL_RE.replace_all(text, " ");
    let result = SYMBOL_RE.replace_all(&result, " ");
    let result = result.replace('+', " plus ").replace('&', " and ");
    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip everything but word characters, whitespace and hyphens
pub fn sanitize_thread_id(id: &str) -> String {
    THREAD_ID_RE.replace_all(id, "").into_owned()
}

/// Per-thread audio directory: `<root>/<sanitized id>/mp3`
pub fn thread_audio_dir(root: &Path, thread_id: &str) -> PathBuf {
    root.join(sanitize_thread_id(thread_id)).join("mp3")
}

/// Split text into chunks of at most `max_chars` characters, preferring
/// sentence boundaries, then word boundaries.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if max_chars == 0 || text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in SENTENCE_RE.find_iter(text).map(|m| m.as_str()) {
        if sentence.is_empty() {
            continue;
        }
        let sentence_len = sentence.chars().count();

        if !current.is_empty() && current.chars().count() + sentence_len > max_chars {
            push_chunk(&mut chunks, &current);
            current.clear();
        }

        if sentence_len > max_chars {
            chunks.extend(split_words(sentence, max_chars));
        } else {
            current.push_str(sentence);
        }
    }
    push_chunk(&mut chunks, &current);

    chunks
}

fn push_chunk(chunks: &mut Vec<String>, chunk: &str) {
    let chunk = chunk.trim();
    if !chunk.is_empty() {
        chunks.push(chunk.to_string());
    }
}

fn split_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current_len > 0 && current_len + 1 + word_len > max_chars {
            pieces.push(std::mem::take(&mut current));
        }

        if word_len > max_chars {
            let chars: Vec<char> = word.chars().collect();
            pieces.extend(chars.chunks(max_chars).map(|c| c.iter().collect::<String>()));
            continue;
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_removes_urls() {
        assert_eq!(
            sanitize_text("Check https://example.com/page now!"),
            "Check now"
        );
    }

    #[test]
    fn test_sanitize_keeps_inner_apostrophes() {
        assert_eq!(
            sanitize_text("I can't (really) say \"that\""),
            "I can't really say that"
        );
        assert_eq!(sanitize_text("he said 'no' twice"), "he said no twice");
    }

    #[test]
    fn test_sanitize_spells_out_symbols() {
        assert_eq!(sanitize_text("A & B + C"), "A and B plus C");
        assert_eq!(sanitize_text("**bold**   ~~strike~~"), "bold strike");
    }

    #[test]
    fn test_sanitize_thread_id() {
        assert_eq!(sanitize_thread_id("abc123"), "abc123");
        assert_eq!(sanitize_thread_id("../x/y_z-1"), "xy_z-1");
        assert_eq!(sanitize_thread_id("a b;rm -rf"), "a brm -rf");
    }

    #[test]
    fn test_thread_audio_dir() {
        assert_eq!(
            thread_audio_dir(Path::new("assets/temp"), "1a2b/../c"),
            PathBuf::from("assets/temp/1a2bc/mp3")
        );
    }

    #[test]
    fn test_split_short_text() {
        assert_eq!(split_text("  Hello world.  ", 200), vec!["Hello world."]);
        assert!(split_text("   ", 200).is_empty());
    }

    #[test]
    fn test_split_on_sentences() {
        let chunks = split_text("One two. Three four! Five six?", 12);
        assert_eq!(chunks, vec!["One two.", "Three four!", "Five six?"]);
    }

    #[test]
    fn test_split_respects_limit() {
        let text = "This is a fairly long sentence without much punctuation and a \
                    supercalifragilisticexpialidocious word in the middle of it. Short end.";
        for max in [10, 25, 40] {
            let chunks = split_text(text, max);
            assert!(!chunks.is_empty());
            for chunk in &chunks {
                assert!(chunk.chars().count() <= max, "{chunk:?} > {max}");
            }
            let rejoined: String = chunks.concat();
            let original: String = text.split_whitespace().collect();
            assert_eq!(
                rejoined.split_whitespace().collect::<String>(),
                original,
                "no characters lost at max={max}"
            );
        }
    }
}

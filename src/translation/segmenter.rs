/*!
 * Sentence segmentation.
 *
 * Puts every sentence of the source text on its own line so the provider
 * returns one translated line per sentence and the output can pair them.
 */

/// Line break inserted after a sentence boundary
pub const LINE_BREAK: &str = "\r\n";

/// Insert a line break after every occurrence of `marker` except the last one.
///
/// No insertion happens when the character following an occurrence is the
/// marker itself or already a line break. Every other character is copied
/// through unchanged.
pub fn segment_sentences(text: &str, marker: char) -> String {
    let Some(last) = text.rfind(marker) else {
        return text.to_string();
    };

    let mut segmented = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        segmented.push(ch);

        if ch != marker || index == last {
            continue;
        }

        match chars.peek() {
            Some((_, next)) if *next == marker || *next == '\r' || *next == '\n' => {}
            Some(_) => segmented.push_str(LINE_BREAK),
            None => {}
        }
    }

    segmented
}

/// Number of marker occurrences in `text`
pub fn count_boundaries(text: &str, marker: char) -> usize {
    text.chars().filter(|c| *c == marker).count()
}

/*!
 * Chunk planning.
 *
 * The translation endpoint only accepts short inputs, so segmented text is
 * partitioned into ordered chunks that never split a sentence.
 */

use log::warn;

/// Default maximum chunk length in characters
pub const DEFAULT_MAX_CHUNK_LEN: usize = 150;

/// A contiguous slice of the segmented text sent as one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position of the chunk in source order
    pub index: usize,
    /// Chunk text, exactly as it appears in the segmented source
    pub text: String,
}

impl Chunk {
    /// Length of the chunk in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Text sent to the provider.
    ///
    /// A chunk that starts right after a boundary carries the line break
    /// that followed the previous sentence; it is dropped here so source and
    /// translated lines stay aligned.
    pub fn request_text(&self) -> &str {
        self.text
            .strip_prefix("\r\n")
            .or_else(|| self.text.strip_prefix('\n'))
            .unwrap_or(&self.text)
    }

    /// Source lines of the chunk, in order
    pub fn source_lines(&self) -> Vec<String> {
        split_lines(self.request_text())
    }
}

/// Split text on line breaks, accepting both `\r\n` and `\n`
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Plans sentence-aligned chunks under a maximum length
#[derive(Debug, Clone)]
pub struct ChunkPlanner {
    max_len: usize,
    marker: char,
}

impl ChunkPlanner {
    /// Create a planner for the given maximum length and boundary marker
    pub fn new(max_len: usize, marker: char) -> Self {
        Self {
            max_len: max_len.max(1),
            marker,
        }
    }

    /// Maximum chunk length in characters
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Partition `text` into chunks whose concatenation is `text`.
    ///
    /// Every chunk but the last ends right after a boundary marker and holds
    /// at most `max_len` characters. A window without any marker is cut hard
    /// at `max_len` characters.
    pub fn plan(&self, text: &str) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut remaining = text;

        while remaining.chars().count() > self.max_len {
            let window_end = byte_offset_of_char(remaining, self.max_len);
            let window = &remaining[..window_end];

            let cut = match window.rfind(self.marker) {
                Some(position) => position + self.marker.len_utf8(),
                None => {
                    warn!(
                        "No sentence boundary within {} characters, cutting chunk {} mid-sentence",
                        self.max_len,
                        chunks.len() + 1
                    );
                    window_end
                }
            };

            chunks.push(Chunk {
                index: chunks.len(),
                text: remaining[..cut].to_string(),
            });
            remaining = &remaining[cut..];
        }

        if !remaining.is_empty() {
            chunks.push(Chunk {
                index: chunks.len(),
                text: remaining.to_string(),
            });
        }

        chunks
    }
}

impl Default for ChunkPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_LEN, crate::language_utils::LATIN_FULL_STOP)
    }
}

// Byte offset of the `n`th character, or the text length when shorter
fn byte_offset_of_char(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

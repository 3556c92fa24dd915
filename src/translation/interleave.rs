/*!
 * Positional pairing of source and translated lines.
 */

use super::segmenter::LINE_BREAK;

/// Merge source and translated lines by position.
///
/// For each index the source line comes first, then the translated line.
/// Once one side runs out only the other side is emitted.
pub fn interleave<S, T>(source_lines: &[S], translated_lines: &[T]) -> Vec<String>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let pairs = source_lines.len().max(translated_lines.len());
    let mut merged = Vec::with_capacity(source_lines.len() + translated_lines.len());

    for i in 0..pairs {
        if let Some(source) = source_lines.get(i) {
            merged.push(source.as_ref().to_string());
        }
        if let Some(translated) = translated_lines.get(i) {
            merged.push(translated.as_ref().to_string());
        }
    }

    merged
}

/// Join lines, terminating each one with `\r\n`
pub fn render_lines<L: AsRef<str>>(lines: &[L]) -> String {
    let mut rendered = String::new();
    for line in lines {
        rendered.push_str(line.as_ref());
        rendered.push_str(LINE_BREAK);
    }
    rendered
}

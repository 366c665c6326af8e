//! Chapter assembly.
//!
//! Joins per-scene prose into chapter text with exactly one blank line
//! between consecutive scenes, regardless of whatever leading or trailing
//! whitespace the generator attached to each scene.

/// Concatenate per-scene prose into chapter text.
///
/// Each scene's text is trimmed of surrounding whitespace before the
/// double-newline separator is applied, so separators never accumulate into
/// runs of blank lines. Interior runs of three or more newlines within a
/// single scene's prose are collapsed to one blank line for the same reason.
/// Scenes whose prose is empty after trimming are dropped. Zero scenes
/// assemble to the empty string.
///
/// # Examples
///
/// ```
/// use fabula_chapter::assemble_chapter;
///
/// let chapter = assemble_chapter(["Scene A text", "Scene B text\n\n"]);
/// assert_eq!(chapter, "Scene A text\n\nScene B text");
/// ```
pub fn assemble_chapter<I, S>(scene_texts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = scene_texts
        .into_iter()
        .map(|text| collapse_newline_runs(text.as_ref().trim()))
        .filter(|text| !text.is_empty())
        .collect();

    parts.join("\n\n")
}

/// Cap consecutive newlines at two, leaving shorter runs untouched.
fn collapse_newline_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;

    for ch in text.chars() {
        if ch == '\n' {
            run += 1;
            if run <= 2 {
                out.push(ch);
            }
        } else {
            run = 0;
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_scenes_assemble_to_empty_string() {
        let texts: [&str; 0] = [];
        assert_eq!(assemble_chapter(texts), "");
    }

    #[test]
    fn single_scene_is_trimmed() {
        assert_eq!(assemble_chapter(["  Scene text \n\n"]), "Scene text");
    }

    #[test]
    fn trailing_newlines_do_not_stack_with_separator() {
        let chapter = assemble_chapter(["Scene A text", "Scene B text\n\n"]);
        assert_eq!(chapter, "Scene A text\n\nScene B text");
        assert!(!chapter.contains("\n\n\n"));
    }

    #[test]
    fn leading_whitespace_is_stripped() {
        let chapter = assemble_chapter(["Scene A\n\n", "\n\n  Scene B"]);
        assert_eq!(chapter, "Scene A\n\nScene B");
    }

    #[test]
    fn interior_newline_runs_are_collapsed() {
        let chapter = assemble_chapter(["First paragraph\n\n\n\nSecond paragraph", "Next scene"]);
        assert_eq!(
            chapter,
            "First paragraph\n\nSecond paragraph\n\nNext scene"
        );
    }

    #[test]
    fn empty_scene_texts_are_dropped() {
        let chapter = assemble_chapter(["Scene A", "   \n\n ", "Scene B"]);
        assert_eq!(chapter, "Scene A\n\nScene B");
    }

    #[test]
    fn paragraph_breaks_within_scenes_survive() {
        let chapter = assemble_chapter(["One\n\nTwo", "Three"]);
        assert_eq!(chapter, "One\n\nTwo\n\nThree");
    }
}

//! Pack name extraction.

/// Find the pack name in `haystack`.
///
/// A pack name is one or more word characters (Unicode letters, digits and
/// `_`), a single space, then `suffix`, e.g. `Techno From Mars`. The leftmost
/// match wins. Names chained without a separator, as in
/// `Techno From MarsAcid From Mars`, are returned as one name.
pub fn extract_pack_name<'a>(haystack: &'a str, suffix: &str) -> Option<&'a str> {
    let mut search_from = 0;

    while let Some(found) = find_suffix(haystack, search_from, suffix) {
        let word_start = word_run_start(haystack, found);
        if word_start < found {
            let end = extend_chain(haystack, found + 1 + suffix.len(), suffix);
            return Some(&haystack[word_start..end]);
        }
        search_from = found + 1;
    }

    None
}

/// Byte offset of the next " {suffix}" at or after `from`, pointing at the space.
fn find_suffix(haystack: &str, from: usize, suffix: &str) -> Option<usize> {
    let rest = haystack.get(from..)?;
    let mut offset = 0;

    while let Some(pos) = rest[offset..].find(' ') {
        let space = offset + pos;
        if rest[space + 1..].starts_with(suffix) {
            return Some(from + space);
        }
        offset = space + 1;
    }

    None
}

/// Start of the run of word characters ending right before `end`.
fn word_run_start(haystack: &str, end: usize) -> usize {
    haystack[..end]
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map_or(end, |(i, _)| i)
}

/// Extend a match over directly following `<word> {suffix}` repetitions.
fn extend_chain(haystack: &str, mut end: usize, suffix: &str) -> usize {
    loop {
        let rest = &haystack[end..];
        let word_len: usize = rest
            .chars()
            .take_while(|c| is_word_char(*c))
            .map(char::len_utf8)
            .sum();

        if word_len == 0 {
            return end;
        }

        let after_word = &rest[word_len..];
        if after_word.starts_with(' ') && after_word[1..].starts_with(suffix) {
            end += word_len + 1 + suffix.len();
        } else {
            return end;
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

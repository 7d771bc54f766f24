use std::collections::HashSet;

/// True when `needle` occurs as a contiguous run inside `haystack`.
pub fn contains_run<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}

/// Collects dictionary words that appear in any scan line.
///
/// The found set lives on the matcher and keeps growing across calls to
/// [`WordMatcher::find`] until [`WordMatcher::clear`] is called.
#[derive(Debug, Default)]
pub struct WordMatcher {
    found: HashSet<String>,
}

impl WordMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every word found in `scan_lines` to the accumulated set and
    /// return it. Matching is exact and case-sensitive.
    pub fn find<W, L>(&mut self, dictionary: &[W], scan_lines: &[L]) -> &HashSet<String>
    where
        W: AsRef<str>,
        L: AsRef<str>,
    {
        for word in dictionary {
            let word = word.as_ref();
            if self.found.contains(word) {
                continue;
            }
            let hit = scan_lines
                .iter()
                .any(|line| contains_run(line.as_ref().as_bytes(), word.as_bytes()));
            if hit {
                self.found.insert(word.to_string());
            }
        }
        &self.found
    }

    pub fn found(&self) -> &HashSet<String> {
        &self.found
    }

    pub fn clear(&mut self) {
        self.found.clear();
    }

    pub fn into_found(self) -> HashSet<String> {
        self.found
    }
}

/// Stateless variant of [`WordMatcher::find`] returning a fresh set.
pub fn find_words<W, L>(dictionary: &[W], scan_lines: &[L]) -> HashSet<String>
where
    W: AsRef<str>,
    L: AsRef<str>,
{
    let mut matcher = WordMatcher::new();
    matcher.find(dictionary, scan_lines);
    matcher.into_found()
}

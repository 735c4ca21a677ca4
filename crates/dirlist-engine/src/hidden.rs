//! Hidden-path matching.

/// Decides whether a path is covered by a configured set of hidden path
/// prefixes.
///
/// A hidden entry matches when it is a positional segment prefix of the
/// candidate: `a/b` hides `a/b` and `a/b/c`, but not `x/a/b` and not
/// `a/bc`. This is stricter than substring containment.
pub struct HiddenPathMatcher<'a> {
    hidden_paths: &'a [String],
}

impl<'a> HiddenPathMatcher<'a> {
    /// Create a matcher over the configured hidden paths.
    pub fn new(hidden_paths: &'a [String]) -> Self {
        Self { hidden_paths }
    }

    /// Check whether `candidate` falls under any hidden path.
    ///
    /// Entries are tried in configuration order; the first match wins.
    pub fn is_hidden(&self, candidate: &str) -> bool {
        let candidate_segments: Vec<&str> = candidate.split('/').collect();

        for hidden in self.hidden_paths {
            let hidden = hidden.strip_suffix('/').unwrap_or(hidden);
            let hidden_segments: Vec<&str> = hidden.split('/').collect();

            if hidden_segments.len() > candidate_segments.len() {
                continue;
            }

            let is_prefix = hidden_segments
                .iter()
                .zip(&candidate_segments)
                .all(|(h, c)| h == c);

            if is_prefix {
                return true;
            }
        }

        false
    }
}

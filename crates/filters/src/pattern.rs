use globset::{GlobBuilder, GlobMatcher};

/// Shell-glob name predicate with fnmatch-style leading-period handling.
///
/// The pattern text is kept verbatim; a leading period in the candidate name
/// must be matched by a literal leading period in the pattern, never by a
/// wildcard.
#[derive(Clone, Debug)]
pub struct NamePattern {
    text: String,
    matcher: Option<GlobMatcher>,
}

impl NamePattern {
    /// Compiles `pattern` into a matcher.
    ///
    /// The pattern is taken as written. Text globset cannot compile is still
    /// usable: matching degrades to literal comparison, the way fnmatch
    /// treats undefined patterns as ordinary characters.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(false)
            .backslash_escape(true)
            .build()
            .ok()
            .map(|glob| glob.compile_matcher());
        Self {
            text: pattern.to_string(),
            matcher,
        }
    }

    /// Returns the pattern text as supplied on the command line.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns whether `name` satisfies the pattern.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        if name.starts_with('.') && !self.text.starts_with('.') {
            return false;
        }
        match &self.matcher {
            Some(matcher) => matcher.is_match(name),
            None => self.text == name,
        }
    }
}

/// Two patterns are equal when their source text is equal; the compiled
/// matcher is a pure function of that text.
impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for NamePattern {}

#[cfg(test)]
mod tests {
    use super::NamePattern;

    #[test]
    fn pattern_text_is_kept_verbatim() {
        let pattern = NamePattern::new("*.rs");
        assert_eq!(pattern.as_str(), "*.rs");
    }

    #[test]
    fn uncompilable_pattern_falls_back_to_literal_comparison() {
        let pattern = NamePattern::new("[");
        assert!(pattern.matches("["));
        assert!(!pattern.matches("x"));
    }
}

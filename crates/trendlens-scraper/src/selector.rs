//! Ordered CSS selector candidates resolved against a parsed page.
//!
//! Build-hashed class names on the target site change without notice, so
//! callers list candidates from most specific to most generic and take the
//! first one that matches anything.

use scraper::{ElementRef, Html, Selector};

/// A precompiled, ordered list of selector candidates.
#[derive(Debug, Clone)]
pub struct SelectorChain {
    candidates: Vec<(usize, String, Selector)>,
}

/// The winning candidate of a [`SelectorChain`] and everything it matched.
#[derive(Debug)]
pub struct SelectorMatch<'a, 's> {
    /// Position of the winning candidate in the original pattern list.
    pub index: usize,
    pub pattern: &'s str,
    /// Non-empty, in document order.
    pub elements: Vec<ElementRef<'a>>,
}

impl SelectorChain {
    /// Compiles `patterns` in order. Patterns that fail to parse are skipped
    /// with a warning and do not shift the indices of the others.
    #[must_use]
    pub fn new(patterns: &[&str]) -> Self {
        let candidates = patterns
            .iter()
            .enumerate()
            .filter_map(|(index, pattern)| match Selector::parse(pattern) {
                Ok(selector) => Some((index, (*pattern).to_string(), selector)),
                Err(e) => {
                    tracing::warn!(pattern = %pattern, error = ?e, "skipping unparseable selector");
                    None
                }
            })
            .collect();
        Self { candidates }
    }

    /// Number of usable candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns the first candidate with a non-empty match set anywhere in the
    /// document, or `None` when every candidate comes up empty.
    #[must_use]
    pub fn resolve_document<'a>(&self, document: &'a Html) -> Option<SelectorMatch<'a, '_>> {
        self.resolve_with(|selector| document.select(selector).collect())
    }

    /// Like [`resolve_document`](Self::resolve_document) but scoped to one
    /// element subtree.
    #[must_use]
    pub fn resolve_in<'a>(&self, scope: ElementRef<'a>) -> Option<SelectorMatch<'a, '_>> {
        self.resolve_with(|selector| scope.select(selector).collect())
    }

    /// First element matched by the first non-empty candidate within `scope`.
    #[must_use]
    pub fn first_in<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.candidates
            .iter()
            .find_map(|(_, _, selector)| scope.select(selector).next())
    }

    fn resolve_with<'a, F>(&self, select: F) -> Option<SelectorMatch<'a, '_>>
    where
        F: Fn(&Selector) -> Vec<ElementRef<'a>>,
    {
        self.candidates
            .iter()
            .find_map(|(index, pattern, selector)| {
                let elements = select(selector);
                if elements.is_empty() {
                    tracing::debug!(pattern = %pattern, "selector candidate matched nothing");
                    None
                } else {
                    Some(SelectorMatch {
                        index: *index,
                        pattern: pattern.as_str(),
                        elements,
                    })
                }
            })
    }
}

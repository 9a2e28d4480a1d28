//! `PhraseGenerator`: deterministic, never-repeating one-liners.
//!
//! Phrases are assembled from two finite word pools driven by a single
//! monotonic counter, so the sequence is fully deterministic and needs no
//! randomness. The intro pool cycles fastest; the claim pool advances once
//! per full intro cycle, so `(intro, claim)` pairs only recur after
//! `intros.len() * claims.len()` productions. The counter embedded in each
//! phrase makes every output string unique regardless.

use crate::error::Error;

/// Stateful generator of distinct short commentary lines.
///
/// Exposes exactly one operation, [`next_phrase`]; the internal counter is
/// monotonic and the generator is deliberately not restartable.
///
/// [`next_phrase`]: PhraseGenerator::next_phrase
#[derive(Clone, Debug)]
pub struct PhraseGenerator {
    intros: Vec<String>,
    claims: Vec<String>,
    tag: String,
    counter: usize,
}

impl PhraseGenerator {
    /// Create a generator from two word pools and a tag label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWordPool`] if either pool is empty.
    pub fn new<S: Into<String>>(
        intros: impl IntoIterator<Item = S>,
        claims: impl IntoIterator<Item = S>,
        tag: impl Into<String>,
    ) -> Result<Self, Error> {
        let intros: Vec<String> = intros.into_iter().map(Into::into).collect();
        let claims: Vec<String> = claims.into_iter().map(Into::into).collect();
        if intros.is_empty() || claims.is_empty() {
            return Err(Error::EmptyWordPool);
        }
        Ok(Self {
            intros,
            claims,
            tag: tag.into(),
            counter: 0,
        })
    }

    /// Produce the next phrase and advance the counter.
    ///
    /// Output format is `"<intro> <claim> (<tag> #<n>)"` with `n` the
    /// 1-based production count. The sequence is infinite and no two
    /// productions are ever equal.
    pub fn next_phrase(&mut self) -> String {
        let index = self.counter;
        let intro = &self.intros[index % self.intros.len()];
        let claim = &self.claims[(index / self.intros.len()) % self.claims.len()];
        self.counter += 1;
        // The rolling counter guarantees uniqueness once the pool pairs wrap.
        format!("{intro} {claim} ({} #{})", self.tag, self.counter)
    }

    /// Number of productions so far.
    #[inline]
    pub const fn productions(&self) -> usize {
        self.counter
    }

    /// The tag label embedded in every phrase.
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_pools_rejected() {
        let none: Vec<&str> = Vec::new();
        assert!(matches!(
            PhraseGenerator::new(none.clone(), vec!["x"], "t"),
            Err(Error::EmptyWordPool)
        ));
        assert!(matches!(
            PhraseGenerator::new(vec!["x"], none, "t"),
            Err(Error::EmptyWordPool)
        ));
    }

    #[test]
    fn test_first_six_productions_distinct_and_tagged() {
        let mut pg = PhraseGenerator::new(vec!["a", "b"], vec!["c", "d"], "tag").unwrap();
        let mut seen = HashSet::new();
        for n in 1..=6 {
            let phrase = pg.next_phrase();
            assert!(phrase.contains(&format!("tag #{n}")), "got {phrase:?}");
            seen.insert(phrase);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_pools_indexed_by_counter() {
        let mut pg = PhraseGenerator::new(vec!["a", "b"], vec!["c", "d"], "t").unwrap();
        // Intros cycle fastest; claims advance per full intro cycle.
        assert_eq!(pg.next_phrase(), "a c (t #1)");
        assert_eq!(pg.next_phrase(), "b c (t #2)");
        assert_eq!(pg.next_phrase(), "a d (t #3)");
        assert_eq!(pg.next_phrase(), "b d (t #4)");
        // Pool pairs wrap, but the counter keeps the string unique.
        assert_eq!(pg.next_phrase(), "a c (t #5)");
    }

    #[test]
    fn test_deterministic_across_instances() {
        let mut left = PhraseGenerator::new(vec!["a"], vec!["b", "c"], "t").unwrap();
        let mut right = left.clone();
        for _ in 0..10 {
            assert_eq!(left.next_phrase(), right.next_phrase());
        }
    }

    #[test]
    fn test_no_repeats_over_many_productions() {
        let mut pg = PhraseGenerator::new(vec!["a", "b", "c"], vec!["x", "y"], "t").unwrap();
        let outputs: HashSet<String> = (0..100).map(|_| pg.next_phrase()).collect();
        assert_eq!(outputs.len(), 100);
        assert_eq!(pg.productions(), 100);
    }
}

use crate::config::DEFAULT_CUTOFF;

/// Normalize a string for fuzzy comparison: trim and lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Gestalt (Ratcliff/Obershelp) similarity ratio between two strings.
///
/// Recursively finds the longest common substring, then matches the pieces to
/// its left and right, and returns `2 * matched_chars / total_chars`. The
/// measure is symmetric, deterministic, and ranges over [0, 1]; two empty
/// strings are fully similar.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Longest common substring; on ties the earliest occurrence wins, which
    // keeps the recursion deterministic.
    let mut best_len = 0;
    let mut best_a = 0;
    let mut best_b = 0;
    let mut prev = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        let mut cur = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let run = prev[j] + 1;
                cur[j + 1] = run;
                if run > best_len {
                    best_len = run;
                    best_a = i + 1 - run;
                    best_b = j + 1 - run;
                }
            }
        }
        prev = cur;
    }

    if best_len == 0 {
        return 0;
    }
    best_len
        + matching_chars(&a[..best_a], &b[..best_b])
        + matching_chars(&a[best_a + best_len..], &b[best_b + best_len..])
}

/// Picks the single best approximate match for a query out of a vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyResolver {
    /// Minimum similarity for a vocabulary item to count as a match.
    pub cutoff: f64,
}

impl Default for FuzzyResolver {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl FuzzyResolver {
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }

    /// Returns the vocabulary item most similar to `query`, or `None` when
    /// the query is blank or nothing reaches the cutoff. Comparison is
    /// case-insensitive on both sides; the returned item is the vocabulary
    /// entry verbatim. Ties on the top score go to the item seen first in
    /// vocabulary iteration order.
    pub fn best_match<'a, I>(&self, query: &str, vocabulary: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = normalize(query);
        if query.is_empty() {
            return None;
        }

        let mut best: Option<&'a str> = None;
        let mut best_score = 0.0;
        for candidate in vocabulary {
            let score = ratio(&query, &normalize(candidate));
            if score >= self.cutoff && score > best_score {
                best_score = score;
                best = Some(candidate);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_known_values() {
        assert_eq!(ratio("ph", "ph"), 1.0);
        assert_eq!(ratio("", ""), 1.0);
        assert_eq!(ratio("abc", "xyz"), 0.0);
        // "phx" vs "ph": 2 matched chars out of 5 total.
        assert!((ratio("phx", "ph") - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        let pairs = [("potency?", "purity??"), ("widget", "gadget"), ("a", "")];
        for (a, b) in pairs {
            assert_eq!(ratio(a, b), ratio(b, a));
        }
    }

    #[test]
    fn test_ratio_counts_split_blocks() {
        // Longest block "bcd", plus "a" on the left: 4 matched chars.
        assert!((ratio("abcd", "axbcd") - (2.0 * 4.0 / 9.0)).abs() < 1e-9);
    }

    #[test]
    fn test_best_match_respects_cutoff() {
        let resolver = FuzzyResolver::new(0.6);
        let vocab = ["Potency?", "Assay method?"];
        assert_eq!(
            resolver.best_match("potency??", vocab.iter().copied()),
            Some("Potency?")
        );
        assert_eq!(resolver.best_match("unrelated text", vocab.iter().copied()), None);
    }

    #[test]
    fn test_best_match_blank_query_is_none() {
        let resolver = FuzzyResolver::default();
        assert_eq!(resolver.best_match("   ", ["anything"].iter().copied()), None);
    }

    #[test]
    fn test_best_match_tie_goes_to_first_item() {
        let resolver = FuzzyResolver::new(0.5);
        // Both candidates are the same distance from the query.
        let vocab = ["abcx", "abcy"];
        assert_eq!(
            resolver.best_match("abc", vocab.iter().copied()),
            Some("abcx")
        );
    }

    #[test]
    fn test_best_match_is_deterministic() {
        let resolver = FuzzyResolver::default();
        let vocab = ["ph", "potency", "appearance"];
        let first = resolver.best_match("phh", vocab.iter().copied());
        for _ in 0..10 {
            assert_eq!(resolver.best_match("phh", vocab.iter().copied()), first);
        }
    }
}

//! Combinatorial generation of edit-distance candidates.

use ahash::AHashSet;
use rayon::prelude::*;

use crate::alphabet::Alphabet;

/// Generates every string reachable from a token by primitive edit
/// operations: deletion, transposition, replacement, and insertion.
///
/// Replacement and insertion draw their characters from the configured
/// alphabet, so the alphabet bounds the candidate space. All results use set
/// semantics: a candidate reachable through several different edits appears
/// once.
#[derive(Debug, Clone)]
pub struct EditGenerator {
    alphabet: Alphabet,
}

impl EditGenerator {
    /// Create a generator over the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        EditGenerator { alphabet }
    }

    /// The alphabet used for replacements and insertions.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// All strings reachable from the token by exactly one primitive edit.
    ///
    /// An empty token yields insertions only, one candidate per alphabet
    /// character.
    pub fn edits1(&self, token: &str) -> AHashSet<String> {
        let chars: Vec<char> = token.chars().collect();
        let len = chars.len();

        // Two length-preserving edits per position plus the alphabet-wide
        // replacement and insertion fan-out.
        let mut edits = AHashSet::with_capacity(2 * len + 2 * (len + 1) * self.alphabet.len());

        // Deletions
        for i in 0..len {
            let mut new_word = chars.clone();
            new_word.remove(i);
            edits.insert(new_word.into_iter().collect());
        }

        // Transpositions (swapping adjacent characters)
        for i in 0..len.saturating_sub(1) {
            let mut new_word = chars.clone();
            new_word.swap(i, i + 1);
            edits.insert(new_word.into_iter().collect());
        }

        // Replacements
        for i in 0..len {
            for &ch in self.alphabet.chars() {
                if ch != chars[i] {
                    let mut new_word = chars.clone();
                    new_word[i] = ch;
                    edits.insert(new_word.into_iter().collect());
                }
            }
        }

        // Insertions
        for i in 0..=len {
            for &ch in self.alphabet.chars() {
                let mut new_word = chars.clone();
                new_word.insert(i, ch);
                edits.insert(new_word.into_iter().collect());
            }
        }

        edits
    }

    /// All vocabulary members reachable from the token by two primitive
    /// edits.
    ///
    /// Composes [`edits1`](Self::edits1) twice, retaining only results the
    /// `in_vocab` predicate accepts. Filtering at the second level keeps the
    /// O(|alphabet|·len²)-squared blow-up from ever being materialized. The
    /// first-level candidates expand in parallel, each into a private set,
    /// before the final merge.
    pub fn edits2<F>(&self, token: &str, in_vocab: F) -> AHashSet<String>
    where
        F: Fn(&str) -> bool + Sync,
    {
        let first: Vec<String> = self.edits1(token).into_iter().collect();

        let merged: std::collections::HashSet<String, ahash::RandomState> = first
            .par_iter()
            .flat_map_iter(|candidate| {
                self.edits1(candidate)
                    .into_iter()
                    .filter(|word| in_vocab(word))
            })
            .collect();
        merged.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> EditGenerator {
        EditGenerator::new(Alphabet::ascii_lowercase())
    }

    #[test]
    fn test_edits1_contains_all_operation_kinds() {
        let edits = generator().edits1("teh");

        assert!(edits.contains("eh")); // deletion
        assert!(edits.contains("the")); // transposition
        assert!(edits.contains("ten")); // replacement
        assert!(edits.contains("tehs")); // insertion
    }

    #[test]
    fn test_edits1_on_short_words() {
        let edits = generator().edits1("cat");

        assert!(edits.contains("at"));
        assert!(edits.contains("ct"));
        assert!(edits.contains("ca"));
        assert!(edits.contains("act"));
        assert!(edits.contains("bat"));
        assert!(edits.contains("cot"));
        assert!(edits.contains("cart"));
        // A three-letter token over a 26-letter alphabet fans out widely
        assert!(edits.len() > 100);
    }

    #[test]
    fn test_edits1_empty_token_yields_insertions_only() {
        let edits = generator().edits1("");

        assert_eq!(edits.len(), 26);
        assert!(edits.contains("a"));
        assert!(edits.contains("z"));
    }

    #[test]
    fn test_edits1_respects_alphabet() {
        let generator = EditGenerator::new(Alphabet::new("ab".chars()).unwrap());
        let edits = generator.edits1("a");

        // deletions: ""; replacements: "b"; insertions: aa ab ba
        assert!(edits.contains(""));
        assert!(edits.contains("b"));
        assert!(edits.contains("aa"));
        assert!(edits.contains("ab"));
        assert!(edits.contains("ba"));
        assert_eq!(edits.len(), 5);
    }

    #[test]
    fn test_edits2_filters_through_vocabulary() {
        let vocabulary: AHashSet<&str> = ["spelling", "spellings", "spell"].into_iter().collect();
        let edits = generator().edits2("speling", |word| vocabulary.contains(word));

        // "spelling" is one edit away and still reachable in two
        assert!(edits.contains("spelling"));
        // "spellings" needs two inserts from "speling"
        assert!(edits.contains("spellings"));
        // "spell" is three edits away
        assert!(!edits.contains("spell"));
        // Nothing outside the vocabulary survives
        assert!(edits.iter().all(|word| vocabulary.contains(word.as_str())));
    }

    #[test]
    fn test_edits2_empty_vocabulary_yields_nothing() {
        let edits = generator().edits2("teh", |_| false);
        assert!(edits.is_empty());
    }
}

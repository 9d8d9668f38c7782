//! Word-frequency model backing the corrector's vocabulary.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use ahash::AHashMap;

use crate::error::Result;

/// A mapping from word to occurrence count.
///
/// The set of keys defines the vocabulary: a token is "in vocabulary" exactly
/// when it has an entry here. Words are stored as supplied; any case-folding
/// policy belongs to whoever builds the model ([`FrequencyModel::from_corpus`]
/// lowercases as part of its tokenization). The model is treated as read-only
/// for the lifetime of a corrector.
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    /// Words and their occurrence counts
    counts: AHashMap<String, u64>,
    /// Sum of all counts, maintained incrementally
    total_count: u64,
}

impl FrequencyModel {
    /// Create a new empty model.
    pub fn new() -> Self {
        FrequencyModel {
            counts: AHashMap::new(),
            total_count: 0,
        }
    }

    /// Insert a word with the given count, replacing any previous count.
    pub fn insert<S: Into<String>>(&mut self, word: S, count: u64) {
        let word = word.into();
        let old = self.counts.insert(word, count).unwrap_or(0);
        self.total_count = self.total_count - old + count;
    }

    /// Increment the count of a word by 1, inserting it if absent.
    pub fn increment(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
        self.total_count += 1;
    }

    /// Check if a word is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Get the occurrence count of a word (0 if absent).
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Get the relative frequency of a word (count / total_count).
    pub fn probability(&self, word: &str) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.count(word) as f64 / self.total_count as f64
    }

    /// Number of unique words in the model.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the model has no entries.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrence counts.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Iterate over all (word, count) pairs in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Build a model from a corpus of text.
    ///
    /// Tokenizes on non-alphabetic boundaries, lowercases, and counts
    /// occurrences. Single-character fragments are dropped.
    pub fn from_corpus(text: &str) -> Self {
        let mut model = FrequencyModel::new();

        let words = text
            .split(|c: char| !c.is_alphabetic())
            .filter(|word| word.len() > 1)
            .map(|word| word.to_lowercase());

        for word in words {
            model.increment(&word);
        }

        model
    }

    /// Load a model from a frequency file with format "word count" per line.
    ///
    /// Counts for repeated words accumulate. Malformed lines are skipped.
    pub fn load_from_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut model = FrequencyModel::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let mut parts = line.split_whitespace();

            if let (Some(word), Some(count)) = (parts.next(), parts.next())
                && let Ok(count) = count.parse::<u64>()
            {
                let current = model.count(word);
                model.insert(word, current + count);
            }
        }

        Ok(model)
    }

    /// Load a model from a JSON file containing an object of word → count.
    pub fn load_from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let counts: AHashMap<String, u64> = serde_json::from_reader(BufReader::new(file))?;

        let total_count = counts.values().sum();
        Ok(FrequencyModel {
            counts,
            total_count,
        })
    }

    /// Save the model to a frequency file, most frequent words first.
    pub fn save_to_frequency_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        let mut word_counts: Vec<(&String, &u64)> = self.counts.iter().collect();
        word_counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (word, count) in word_counts {
            writeln!(file, "{word} {count}")?;
        }

        Ok(())
    }

    /// Merge another model into this one, summing counts.
    pub fn merge(&mut self, other: &FrequencyModel) {
        for (word, count) in other.words() {
            let current = self.count(word);
            self.insert(word, current + count);
        }
    }

    /// Remove words with a count below the threshold.
    pub fn prune_below(&mut self, min_count: u64) {
        let removed: u64 = self
            .counts
            .values()
            .filter(|&&count| count < min_count)
            .sum();
        self.counts.retain(|_, count| *count >= min_count);
        self.total_count -= removed;
    }

    /// Get the most frequent words, ties broken lexicographically.
    pub fn top_words(&self, limit: usize) -> Vec<(String, u64)> {
        let mut word_counts: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();

        word_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        word_counts.truncate(limit);
        word_counts
    }
}

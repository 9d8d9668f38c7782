//! Correction orchestration: tier resolution and candidate ranking.

use std::cmp::Ordering;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::dictionary::FrequencyModel;
use crate::edits::EditGenerator;
use crate::error::{KeymendError, Result};
use crate::keyboard::KeyboardLayout;
use crate::proximity::ProximityScorer;

/// Edit depth for raw candidate generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditDistance {
    /// One primitive edit.
    One,
    /// Two primitive edits, restricted to vocabulary members.
    Two,
}

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The suggested word.
    pub word: String,
    /// Keyboard proximity score in `(0, 1]` (higher is more plausible).
    pub score: f64,
    /// Occurrence count of the word in the frequency model.
    pub frequency: u64,
}

impl Recommendation {
    /// Create a new recommendation.
    pub fn new(word: String, score: f64, frequency: u64) -> Self {
        Recommendation {
            word,
            score,
            frequency,
        }
    }
}

/// The spelling corrector.
///
/// Owns an immutable frequency model, an edit generator parameterized by an
/// alphabet, and a keyboard proximity scorer; all three are built once at
/// construction and only read afterwards, so a `&Corrector` may be shared
/// freely across threads.
///
/// Candidates are resolved in strict tier order, the first non-empty tier
/// winning: the token itself if in vocabulary, then in-vocabulary words one
/// edit away, then in-vocabulary words two edits away, then the token
/// unchanged as fallback.
pub struct Corrector {
    model: FrequencyModel,
    generator: EditGenerator,
    scorer: ProximityScorer,
}

impl Corrector {
    /// Create a corrector over the given model, alphabet, and layout.
    ///
    /// Fails with [`KeymendError::EmptyModel`] when the model has no
    /// entries: correction against an empty vocabulary would resolve every
    /// token through the fallback tier, which is meaningless.
    pub fn new(
        model: FrequencyModel,
        alphabet: Alphabet,
        layout: KeyboardLayout,
    ) -> Result<Self> {
        if model.is_empty() {
            return Err(KeymendError::EmptyModel);
        }

        Ok(Corrector {
            model,
            generator: EditGenerator::new(alphabet),
            scorer: ProximityScorer::new(layout),
        })
    }

    /// Create a corrector with the lowercase ASCII alphabet and the bundled
    /// QWERTY layout.
    pub fn with_defaults(model: FrequencyModel) -> Result<Self> {
        Self::new(model, Alphabet::ascii_lowercase(), KeyboardLayout::qwerty())
    }

    /// The frequency model the corrector ranks against.
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// The proximity scorer the corrector ranks with.
    pub fn scorer(&self) -> &ProximityScorer {
        &self.scorer
    }

    /// Best single correction for a token.
    ///
    /// Picks the candidate with the highest occurrence count in the winning
    /// tier, breaking ties by lexicographically smallest word. A token with
    /// no in-vocabulary candidate comes back unchanged; this never fails.
    pub fn correct(&self, token: &str) -> String {
        self.winning_tier(token)
            .into_iter()
            .max_by(|a, b| {
                self.model
                    .count(a)
                    .cmp(&self.model.count(b))
                    .then_with(|| b.cmp(a))
            })
            .unwrap_or_else(|| token.to_string())
    }

    /// Ranked corrections for a token, most plausible first.
    ///
    /// Every in-vocabulary candidate of the winning tier is scored by
    /// keyboard proximity to the token and sorted by (proximity, frequency)
    /// descending, with the word itself as a deterministic final tie-break.
    /// Empty when the fallback tier wins with an out-of-vocabulary token.
    pub fn recommend(&self, token: &str) -> Vec<Recommendation> {
        let mut ranked: Vec<Recommendation> = self
            .winning_tier(token)
            .into_iter()
            .filter(|word| self.model.contains(word))
            .map(|word| {
                let score = self.scorer.proximity(&word, token);
                let frequency = self.model.count(&word);
                Recommendation::new(word, score, frequency)
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.frequency.cmp(&a.frequency))
                .then_with(|| a.word.cmp(&b.word))
        });

        ranked
    }

    /// Raw candidate generation without ranking.
    ///
    /// Distance one is the full unfiltered edit set; distance two carries
    /// the generator's vocabulary-filtered semantics.
    pub fn generate_edits(&self, token: &str, distance: EditDistance) -> AHashSet<String> {
        match distance {
            EditDistance::One => self.generator.edits1(token),
            EditDistance::Two => self
                .generator
                .edits2(token, |word| self.model.contains(word)),
        }
    }

    /// The first non-empty candidate tier for a token.
    fn winning_tier(&self, token: &str) -> AHashSet<String> {
        if self.model.contains(token) {
            return std::iter::once(token.to_string()).collect();
        }

        let one_edit: AHashSet<String> = self
            .generator
            .edits1(token)
            .into_iter()
            .filter(|word| self.model.contains(word))
            .collect();
        if !one_edit.is_empty() {
            return one_edit;
        }

        let two_edits = self
            .generator
            .edits2(token, |word| self.model.contains(word));
        if !two_edits.is_empty() {
            return two_edits;
        }

        std::iter::once(token.to_string()).collect()
    }
}

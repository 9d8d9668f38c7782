//! Keyboard-distance scoring of typo plausibility.

use ahash::AHashSet;

use crate::keyboard::{KeyPosition, KeyboardLayout};

/// Scores how plausible the character-level difference between two words is
/// as a slip of the fingers on a physical keyboard.
///
/// The score looks only at the distinct character sets of the two words. For
/// every character one word has and the other lacks, the scorer finds the
/// nearest key occupied by the other word and turns that distance into a
/// weight `exp(-d)`. The shift-axis component of every distance is halved,
/// so a shifted variant of the same key counts as nearly the same key. The
/// final score is the weight sum divided by the squared weight count, which
/// compounds averaging with a penalty for many differing characters.
#[derive(Debug, Clone)]
pub struct ProximityScorer {
    layout: KeyboardLayout,
}

impl ProximityScorer {
    /// Create a scorer over the given keyboard layout.
    pub fn new(layout: KeyboardLayout) -> Self {
        ProximityScorer { layout }
    }

    /// The keyboard layout the scorer measures against.
    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    /// Typo plausibility of the difference between two words, in `(0, 1]`.
    ///
    /// Symmetric in its arguments. Words with identical character sets (a
    /// pure transposition, a doubled letter) score `1.0`. Characters without
    /// a position in the layout contribute no weight.
    pub fn proximity(&self, a: &str, b: &str) -> f64 {
        let set_a: AHashSet<char> = a.chars().collect();
        let set_b: AHashSet<char> = b.chars().collect();

        let mut weights = Vec::new();
        self.accumulate(&set_b, &set_a, &mut weights);
        self.accumulate(&set_a, &set_b, &mut weights);

        if weights.is_empty() {
            return 1.0;
        }

        // Summation order must not depend on set iteration order, or the
        // score loses exact symmetry in the last bits.
        weights.sort_by(f64::total_cmp);

        let count = weights.len() as f64;
        weights.iter().sum::<f64>() / (count * count)
    }

    /// For every character in `foreign` that `anchor` lacks, push
    /// `exp(-d_min)` where `d_min` is the distance to the nearest key
    /// occupied by `anchor`.
    fn accumulate(
        &self,
        foreign: &AHashSet<char>,
        anchor: &AHashSet<char>,
        weights: &mut Vec<f64>,
    ) {
        let anchor_keys: Vec<KeyPosition> = anchor
            .iter()
            .flat_map(|&ch| self.layout.locate(ch).iter().copied())
            .collect();
        if anchor_keys.is_empty() {
            return;
        }

        for &ch in foreign {
            if anchor.contains(&ch) {
                continue;
            }

            let mut nearest = f64::INFINITY;
            for &position in self.layout.locate(ch) {
                for &key in &anchor_keys {
                    nearest = nearest.min(key_distance(position, key));
                }
            }

            if nearest.is_finite() {
                weights.push((-nearest).exp());
            }
        }
    }
}

/// Euclidean distance between two key cells with the shift-axis component
/// halved: reaching for Shift is an easier slip than reaching one key over.
fn key_distance(a: KeyPosition, b: KeyPosition) -> f64 {
    let dx = a.column as f64 - b.column as f64;
    let dy = a.row as f64 - b.row as f64;
    let dz = (a.plane as f64 - b.plane as f64) / 2.0;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

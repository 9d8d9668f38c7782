//! Basic usage example for the keymend spelling correction library.

use keymend::prelude::*;

fn main() -> Result<()> {
    println!("=== Keymend Spelling Correction Demo ===\n");

    // Build a frequency model from a small corpus
    let corpus = "the quick brown fox jumps over the lazy dog \
                  the dog barks and the fox runs away \
                  a quick response helps when the keyboard slips";
    let model = FrequencyModel::from_corpus(corpus);
    println!(
        "Model built from corpus: {} unique words, {} total occurrences",
        model.len(),
        model.total_count()
    );

    // Lowercase alphabet, bundled QWERTY layout
    let corrector = Corrector::with_defaults(model)?;

    println!("\nBest-guess corrections:");
    for token in ["teh", "quikc", "foxx", "keyboadr", "dog"] {
        println!("  {:10} -> {}", token, corrector.correct(token));
    }

    println!("\nRanked recommendations for 'rhe':");
    for recommendation in corrector.recommend("rhe") {
        println!(
            "  {:10} proximity {:.4}  frequency {}",
            recommendation.word, recommendation.score, recommendation.frequency
        );
    }

    // Raw candidate generation for collaborators that rank elsewhere
    let edits = corrector.generate_edits("teh", EditDistance::One);
    println!("\n'teh' has {} distinct single-edit candidates", edits.len());

    Ok(())
}

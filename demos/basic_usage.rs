// ============================================================================
// Basic Usage Example
// ============================================================================

use sigfig_engine::prelude::*;

fn main() {
    println!("=== Significant-Figure Engine Example ===\n");

    // Counting
    println!("Counting significant figures...");
    for value in ["429", "429.00", ".1509", "0.00000000001", "0"] {
        println!(
            "  {:>15}  ->  {}",
            value,
            significant_figures(value).unwrap()
        );
    }

    // Rounding at every width
    println!("\nRounding 3.10194...");
    for figures in 1..=8u32 {
        println!(
            "  {} figures -> {}",
            figures,
            round_to_figures("3.10194", figures).unwrap()
        );
    }

    // Carry propagation
    println!("\nCarry propagation...");
    for (value, figures) in [("9.9", 1), ("0.9500000029802322", 1), ("99.5", 2)] {
        println!(
            "  {} @ {} -> {}",
            value,
            figures,
            round_to_figures(value, figures).unwrap()
        );
    }

    // Exponential input
    println!("\nExponential input...");
    println!(
        "  1.0430812624750985e-7 @ 15 -> {}",
        round_to_figures("1.0430812624750985e-7", 15).unwrap()
    );

    // Error handling
    println!("\nError handling...");
    println!("  round(\"429\", 0)         -> {:?}", round_to_figures("429", 0));
    println!(
        "  count(\"not a number\")   -> {:?}",
        significant_figures("not a number")
    );
}

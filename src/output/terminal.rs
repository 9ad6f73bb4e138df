// Colored terminal output for predictions, batch tables and signatures.
//
// main.rs decides what to show; this module only formats it.

use colored::Colorize;

use crate::pipeline::attribute::{BatchRow, Outcome};
use crate::scoring::Prediction;
use crate::signature::{Feature, SignatureStore};

use super::truncate_chars;

const NAME_WIDTH: usize = 30;

/// Display the prediction for a single file, with runners-up when available.
pub fn display_prediction(file_name: &str, prediction: Option<&Prediction>, runners_up: &[Prediction]) {
    println!("{}", "=".repeat(60));
    match prediction {
        Some(p) => println!(
            "RESULT: '{}' was most likely written by -> {} {}",
            file_name,
            p.author.bold().green(),
            format!("(distance {:.2})", p.distance).dimmed()
        ),
        None => println!(
            "RESULT: no match for '{}' ({})",
            file_name,
            "no labeled signatures".yellow()
        ),
    }
    println!("{}", "=".repeat(60));

    if !runners_up.is_empty() {
        println!("\n  Next closest:");
        for p in runners_up {
            println!("    {:<NAME_WIDTH$} {:>8.2}", truncate_chars(&p.author, NAME_WIDTH - 3), p.distance);
        }
    }
}

/// Display a `File | Predicted Author` table for a batch run.
pub fn display_batch(rows: &[BatchRow]) {
    println!("{:<NAME_WIDTH$} | {}", "File".bold(), "Predicted Author".bold());
    println!("{}", "-".repeat(50));

    for row in rows {
        let name = truncate_chars(&row.file_name, NAME_WIDTH - 3);
        match &row.outcome {
            Outcome::Predicted(p) => println!("{:<NAME_WIDTH$} | {}", name, p.author),
            Outcome::NoMatch => println!("{:<NAME_WIDTH$} | {}", name, "no match".yellow()),
            Outcome::Unreadable(e) => {
                println!("{:<NAME_WIDTH$} | {} {}", name, "unreadable:".red(), e.dimmed())
            }
        }
    }
}

/// Display every author's signature as a table.
pub fn display_signatures(store: &SignatureStore) {
    if store.is_empty() {
        println!("No labeled signatures. Add text files to the labeled folder.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Author Signatures ({} authors) ===", store.len()).bold()
    );
    println!();

    let header: Vec<String> = Feature::ALL
        .iter()
        .map(|f| format!("{:>8}", f.short_label()))
        .collect();
    println!("  {:<NAME_WIDTH$} {}", "Author".dimmed(), header.join(" ").dimmed());
    println!("  {}", "-".repeat(NAME_WIDTH + 9 * Feature::ALL.len()).dimmed());

    for (author, signature) in store.iter() {
        let values: Vec<String> = signature.iter().map(|(_, v)| format!("{v:>8.3}")).collect();
        println!(
            "  {:<NAME_WIDTH$} {}",
            truncate_chars(author, NAME_WIDTH - 3),
            values.join(" ")
        );
    }
    println!();
}

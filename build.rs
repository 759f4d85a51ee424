//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.
//! The guess dictionary is emitted as the union of both lists so the answer
//! pool is always a subset of the dictionary.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let answers = read_words("data/answers.txt");
    let extra_guesses = read_words("data/guesses.txt");

    write_word_list(
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Words eligible to be chosen as the secret",
        &answers,
    );

    let mut dictionary: Vec<String> = answers;
    dictionary.extend(extra_guesses);
    dictionary.sort();
    dictionary.dedup();

    write_word_list(
        &Path::new(&out_dir).join("dictionary.rs"),
        "DICTIONARY",
        "All words accepted as guesses (superset of the answer pool)",
        &dictionary,
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/guesses.txt");
}

fn read_words(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    content
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|word| !word.is_empty())
        .inspect(|word| {
            assert!(
                word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
                "Bad word in {input_path}: {word:?}"
            );
        })
        .collect()
}

fn write_word_list(output_path: &Path, const_name: &str, doc_comment: &str, words: &[String]) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(
        output,
        "pub const {const_name}_COUNT: usize = {};",
        words.len()
    )
    .unwrap();
}

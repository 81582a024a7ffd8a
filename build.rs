//! Build script to generate the embedded starter word list
//!
//! Reads a tab-separated word list and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/starter_words.tsv",
        &Path::new(&out_dir).join("starter.rs"),
        "STARTER_WORDS",
        "Starter German/English vocabulary used when no word list is given",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/starter_words.tsv");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<Vec<&str>> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').map(str::trim).collect())
        .collect();

    for (i, row) in rows.iter().enumerate() {
        assert!(
            row.len() >= 2 && !row[0].is_empty() && !row[1].is_empty(),
            "{input_path}:{}: expected german<TAB>english[<TAB>example]",
            i + 1
        );
    }

    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "///").unwrap();
    writeln!(output, "/// Each row is `(german, english, example)`.").unwrap();
    writeln!(
        output,
        "pub const {const_name}: &[(&str, &str, Option<&str>)] = &["
    )
    .unwrap();

    for row in rows {
        let example = row
            .get(2)
            .filter(|e| !e.is_empty())
            .map_or_else(|| "None".to_string(), |e| format!("Some({e:?})"));
        writeln!(output, "    ({:?}, {:?}, {example}),", row[0], row[1]).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

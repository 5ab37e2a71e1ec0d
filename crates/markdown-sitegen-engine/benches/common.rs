// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** _content_ and a [link](/page).\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> Quoted `code`\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_sectioned_markdown(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        for level in 2..=6 {
            let header_prefix = "#".repeat(level);
            content.push_str(&format!("{header_prefix} Subsection Level {level}\n\n"));
            content.push_str("Some paragraph content with multiple sentences. This helps create realistic document structure for benchmarking.\n\n");
            for i in 0..3 {
                content.push_str(&format!("- Item {i} at level {level}\n"));
            }
            content.push('\n');
        }
    }

    content
}

//! Human-readable output for one processed input.

use flip_lexer::simple::reverse_words_simple;

/// Render the report block for input number `index` (1-based).
pub fn render(index: usize, input: &str, parsed: &str, compare: bool) -> String {
    let mut out = format!("\nProcessing input {index}\n\tGiven    {input:?}\n\tParsed   {parsed:?}\n");
    if compare {
        let simple = reverse_words_simple(input);
        let verdict = if simple == parsed { "agrees" } else { "differs" };
        out.push_str(&format!("\tSimple   {simple:?} ({verdict})\n"));
    }
    out
}

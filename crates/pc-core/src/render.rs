//! Minimal markdown renderer for the terminal output panel.
//!
//! Handles the subset the evaluator actually produces: headings, bullet
//! lists, fenced code blocks, `inline code`, and **bold** spans. All
//! styling goes through `Style`, so NO_COLOR (or `--plain`) yields clean
//! text with the markers stripped.

use crate::style::Style;

/// Render a markdown document to ANSI-styled terminal text.
pub fn render_markdown(input: &str, style: &Style) -> String {
    let mut out = String::new();
    let mut in_fence = false;

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }

        if in_fence {
            out.push_str(style.dim_start());
            out.push_str("    ");
            out.push_str(line);
            out.push_str(style.reset());
            out.push('\n');
            continue;
        }

        if let Some(heading) = heading_text(trimmed) {
            out.push_str(style.bold_start());
            out.push_str(style.cyan_start());
            out.push_str(&render_inline(heading, style));
            out.push_str(style.reset());
            out.push('\n');
            continue;
        }

        if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            out.push_str("  • ");
            out.push_str(&render_inline(item, style));
            out.push('\n');
            continue;
        }

        out.push_str(&render_inline(line, style));
        out.push('\n');
    }

    out
}

/// Heading text, if the line is an ATX heading (`# ` through `###### `).
fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    line[hashes..].strip_prefix(' ').map(str::trim_start)
}

/// Render `**bold**` and `` `code` `` spans. Unclosed markers are left
/// verbatim.
fn render_inline(text: &str, style: &Style) -> String {
    let mut out = String::new();
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];

        if let Some(after) = rest.strip_prefix("**") {
            if let Some(end) = after.find("**") {
                out.push_str(style.bold_start());
                out.push_str(&after[..end]);
                out.push_str(style.reset());
                i += 2 + end + 2;
                continue;
            }
        }

        if let Some(after) = rest.strip_prefix('`') {
            if let Some(end) = after.find('`') {
                out.push_str(style.cyan_start());
                out.push_str(&after[..end]);
                out.push_str(style.reset());
                i += 1 + end + 1;
                continue;
            }
        }

        match rest.chars().next() {
            Some(ch) => {
                out.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }

    out
}

//! Restores markdown fencing around source code that lost its fences in
//! the copy-paste.
//!
//! A line scan drives a small state machine (`ScanState`): in `Plain`
//! state a strong indicator (or a scored 4-line lookahead) opens a code
//! span; in `InCode` state code-or-blank lines extend it, one
//! definitely-prose line closes it immediately, and two consecutive
//! ambiguous lines close it with the ambiguous lines retained. Closed
//! spans are fenced with a best-effort language tag, unless the span is
//! nothing but punctuation.
//!
//! The heuristic is approximate by design: the output is a readability
//! aid, not compiler input.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Lookahead window for weak-indicator scoring
const LOOKAHEAD_LINES: usize = 4;

/// Score threshold to open a span without a strong indicator
const ENTRY_SCORE: i32 = 3;

/// Ambiguous lines tolerated inside a span before it closes
const MAX_DOUBT: u8 = 2;

static ALREADY_FENCED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*```").expect("hard-coded pattern"));

fn build(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("hard-coded pattern"))
        .collect()
}

/// A single hit almost certainly indicates code.
static STRONG_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        // C# / .NET
        r"^\s*(using\s+System|namespace\s+\w|class\s+\w+\s*[:{]|interface\s+\w+|public\s+class|private\s+class|protected\s+class|internal\s+class)",
        r"^\s*(public|private|protected|internal)\s+(static\s+)?(void|int|string|bool|double|float|decimal|var|async|Task|List|Dictionary|IEnumerable)",
        r"\{\s*get;\s*set;\s*\}",
        r"^\s*(Console|Debug|Trace)\.(Write|Read|Print)",
        // Java
        r"^\s*(public|private|protected)\s+(static\s+)?(void|int|String|boolean|double|float|class|interface)\s+\w+",
        r"^\s*System\.out\.print",
        r"^\s*import\s+java\.",
        // Python
        r"^\s*def\s+\w+\s*\([^)]*\)\s*:",
        r"^\s*class\s+\w+\s*(\([^)]*\))?\s*:",
        r"^\s*(from\s+\w+\s+)?import\s+\w+",
        r"^\s*print\s*\(",
        r"^\s*if\s+.*:\s*$",
        r"^\s*(elif|else)\s*:",
        r"^\s*for\s+\w+\s+in\s+.*:",
        r"^\s*while\s+.*:",
        r"^\s*try\s*:",
        r"^\s*(except|finally)\s*.*:",
        r"^\s*return\s+",
        // Decorators
        r"^\s*@\w+",
        // JavaScript / TypeScript
        r"^\s*(const|let|var)\s+\w+\s*=",
        r"^\s*(function|async\s+function)\s+\w+\s*\(",
        r"^\s*(export|import)\s+(default\s+)?(const|let|var|function|class|interface|type)",
        r"^\s*console\.(log|error|warn|info|debug)\s*\(",
        r"=>\s*\{",
        r"^\s*(interface|type)\s+\w+\s*[={<]",
        // C / C++
        r#"^\s*#include\s*[<"]"#,
        r"^\s*#define\s+\w+",
        r"^\s*(int|void|char|float|double|bool)\s+main\s*\(",
        r"^\s*printf\s*\(",
        r"^\s*scanf\s*\(",
        r"^\s*std::",
        r"^\s*cout\s*<<",
        r"^\s*cin\s*>>",
        // SQL
        r"(?i)^\s*(SELECT|INSERT|UPDATE|DELETE|CREATE|DROP|ALTER|TRUNCATE)\s+",
        r"(?i)^\s*(FROM|WHERE|JOIN|LEFT JOIN|RIGHT JOIN|INNER JOIN|ORDER BY|GROUP BY|HAVING)\s+",
        // HTML/XML/JSX
        r"^\s*<[a-zA-Z][a-zA-Z0-9]*(\s+[^>]*)?>.*</[a-zA-Z][a-zA-Z0-9]*>\s*$",
        r"^\s*<[a-zA-Z][a-zA-Z0-9]*(\s+[^>]*)?/>\s*$",
        r"^\s*</?[a-zA-Z][a-zA-Z0-9]*[^>]*>\s*$",
        // CSS
        r"^\s*\.[a-zA-Z][\w-]*\s*\{",
        r"^\s*#[a-zA-Z][\w-]*\s*\{",
        r"^\s*@(media|keyframes|import|font-face)",
        // Shell
        r"^\s*\$\s+\w+",
        r"^\s*(echo|cd|ls|mkdir|rm|cp|mv|cat|grep|sed|awk|chmod|chown)\s+",
        r"^\s*#!/bin/(bash|sh|zsh)",
        // Go
        r"^\s*package\s+\w+",
        r"^\s*func\s+(\([^)]+\)\s*)?\w+\s*\(",
        r"^\s*import\s+\(",
        r"^\s*fmt\.(Print|Scan)",
        // Rust
        r"^\s*fn\s+\w+\s*\(",
        r"^\s*let\s+(mut\s+)?\w+\s*[=:]",
        r"^\s*use\s+\w+::",
        r"^\s*impl\s+",
        r"^\s*pub\s+(fn|struct|enum|trait)",
        // Ruby
        r"^\s*def\s+\w+",
        r"^\s*end\s*$",
        r"^\s*puts\s+",
        r#"^\s*require\s+['"]"#,
        // PHP
        r"^\s*<\?php",
        r"^\s*\$\w+\s*=",
        r"^\s*(echo|print|var_dump|print_r)\s+",
        r"^\s*function\s+\w+\s*\(",
    ])
});

/// Generic code shapes; only meaningful in numbers.
static WEAK_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        // Just braces / brackets / punctuation
        r"^\s*[\{\}]\s*$",
        r"^\s*[\[\]]\s*$",
        r"^\s*[();,]\s*$",
        // Comments
        r"^\s*//.*$",
        r"^\s*/\*|\*/\s*$",
        r"^\s*\*\s+",
        // Call / assignment shapes
        r"^\s*\w+\s*\([^)]*\)\s*[;{]?\s*$",
        r"^\s*\w+\.\w+\s*\(",
        r"^\s*\w+\s+\w+\s*=\s*.+;?\s*$",
        r"^\s*\w+\s*=\s*.+;?\s*$",
        r"^\s*return\s*;?\s*$",
        r"^\s*break\s*;?\s*$",
        r"^\s*continue\s*;?\s*$",
        r";\s*$",
        // Indented line
        r"^\s+\S",
    ])
});

/// Patterns that read as natural language, vetoing code entry.
static NATURAL_LANGUAGE: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"(?i)^(This|That|The|A|An|It|Here|There|When|Where|What|Why|How|If|For|To|In|On|At|By|With|From|As|Is|Are|Was|Were|Has|Have|Had|Will|Would|Can|Could|Should|May|Might|Must|Do|Does|Did)\s+",
        r"\?$",
        r"^[A-Z][a-z]+\s+[a-z]+\s+[a-z]+",
        r"^\d+\.\s+[A-Z]",
        r"^[-•]\s+[A-Z]",
        r"(?i)^(Note|Warning|Tip|Important|Example|Output|Result|Summary|Explanation)[:.]?\s*",
    ])
});

/// Language hints tested against a whole span, in fixed priority order.
/// Several hints can match one span (C# auto-properties also look like
/// generic braces); table order is the tie-break contract.
static LANGUAGE_HINTS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (
            r"Console\.(Write|Read)|using\s+System|namespace\s+\w|\{\s*get;\s*set;\s*\}|public\s+(class|interface|enum|struct)",
            "csharp",
        ),
        (
            r"System\.out\.print|public\s+static\s+void\s+main|import\s+java\.",
            "java",
        ),
        (
            r"def\s+\w+.*:|print\s*\(|import\s+\w+|from\s+\w+\s+import|if\s+.*:$|for\s+\w+\s+in",
            "python",
        ),
        (
            r"console\.(log|error|warn)|const\s+\w+\s*=|let\s+\w+\s*=|=>\s*[\{(]|require\s*\(|module\.exports",
            "javascript",
        ),
        (
            r"interface\s+\w+\s*\{|type\s+\w+\s*=|:\s*(string|number|boolean|any)\b",
            "typescript",
        ),
        (r"<html|<div|<span|<p\s*>|className=|onClick=", "html"),
        (
            r"(?i)SELECT\s+.*FROM|INSERT\s+INTO|CREATE\s+TABLE|ALTER\s+TABLE",
            "sql",
        ),
        (r"#include|printf\s*\(|scanf\s*\(|int\s+main\s*\(", "c"),
        (r"cout\s*<<|cin\s*>>|std::|#include\s*<iostream>", "cpp"),
        (r"func\s+\w+|package\s+main|fmt\.(Print|Scan)|import\s+\(", "go"),
        (r"fn\s+\w+|let\s+mut|use\s+\w+::|impl\s+\w+", "rust"),
        (
            r"\$\w+\s*=|<\?php|echo\s+|function\s+\w+\s*\(.*\)\s*\{",
            "php",
        ),
        (r"^\s*\.[a-zA-Z][\w-]*\s*\{|@media|@keyframes", "css"),
        (r"^#!/bin/(bash|sh)|echo\s+|^\$\s+", "bash"),
    ]
    .iter()
    .map(|(p, lang)| (Regex::new(p).expect("hard-coded pattern"), *lang))
    .collect()
});

static PURE_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\{\}\[\]\(\)]+$").expect("hard-coded pattern"));

fn has_strong_indicator(line: &str) -> bool {
    STRONG_INDICATORS.iter().any(|p| p.is_match(line))
}

// Matching `#` comments while excluding preprocessor lines would need a
// negative lookahead, which the regex crate does not support, so this one
// lives here as a plain predicate.
fn is_hash_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with('#')
        && !trimmed.starts_with("#include")
        && !trimmed.starts_with("#define")
        && !trimmed.starts_with("#!")
}

fn has_weak_indicator(line: &str) -> bool {
    is_hash_comment(line) || WEAK_INDICATORS.iter().any(|p| p.is_match(line))
}

/// A non-blank line keeps an open span alive if it still looks like code.
fn looks_like_code(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    has_strong_indicator(trimmed) || has_weak_indicator(trimmed)
}

/// Natural-language shapes with no strong counter-evidence.
fn is_definitely_prose(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    NATURAL_LANGUAGE.iter().any(|p| p.is_match(trimmed)) && !has_strong_indicator(trimmed)
}

/// Score the lookahead window starting at `idx`: strong +2, weak +1,
/// definitely-prose −2, blanks skipped. Kept separate from the line
/// iteration so the scoring rule is testable on its own.
fn entry_score(lines: &[&str], idx: usize) -> i32 {
    let mut score = 0;
    for line in lines.iter().skip(idx).take(LOOKAHEAD_LINES) {
        if line.trim().is_empty() {
            continue;
        }
        if has_strong_indicator(line) {
            score += 2;
        } else if has_weak_indicator(line) {
            score += 1;
        } else if is_definitely_prose(line) {
            score -= 2;
        }
    }
    score
}

fn should_open_span(lines: &[&str], idx: usize) -> bool {
    if has_strong_indicator(lines[idx]) {
        return true;
    }
    entry_score(lines, idx) >= ENTRY_SCORE
}

/// Pick a language tag for a closed span; empty when nothing matches.
fn detect_language(span: &[&str]) -> &'static str {
    let text = span.join("\n");
    LANGUAGE_HINTS
        .iter()
        .find(|(pattern, _)| pattern.is_match(&text))
        .map_or("", |(_, lang)| *lang)
}

/// Emit a closed span: fenced when it holds at least one line beyond pure
/// punctuation, otherwise as the plain text it probably was.
fn flush_span(span: &mut Vec<String>, out: &mut Vec<String>) {
    if span.is_empty() {
        return;
    }
    let meaningful = span
        .iter()
        .filter(|l| {
            let t = l.trim();
            !t.is_empty() && !PURE_PUNCTUATION.is_match(t)
        })
        .count();

    if meaningful >= 1 {
        let refs: Vec<&str> = span.iter().map(String::as_str).collect();
        let lang = detect_language(&refs);
        debug!("fencing {} line span as {:?}", span.len(), lang);
        out.push(format!("```{lang}"));
        out.append(span);
        out.push("```".to_string());
    } else {
        out.append(span);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Emitting lines as-is, watching for a code span to open
    Plain,
    /// Accumulating a span; `doubt` counts consecutive ambiguous lines
    InCode { doubt: u8 },
}

/// Wrap unfenced code spans in markdown fences.
///
/// Short-circuit: content that already contains a fenced block is
/// returned unchanged, so fencing is never applied twice.
pub(crate) fn wrap_code_blocks(content: &str) -> String {
    if ALREADY_FENCED.is_match(content) {
        return content.to_string();
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut span: Vec<String> = Vec::new();
    let mut state = ScanState::Plain;

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        // A stray fence line flushes whatever is open and passes through.
        if trimmed.starts_with("```") {
            if matches!(state, ScanState::InCode { .. }) {
                flush_span(&mut span, &mut out);
                state = ScanState::Plain;
            }
            out.push((*line).to_string());
            continue;
        }

        match state {
            ScanState::Plain => {
                if should_open_span(&lines, idx) {
                    span.push((*line).to_string());
                    state = ScanState::InCode { doubt: 0 };
                } else {
                    out.push((*line).to_string());
                }
            }
            ScanState::InCode { doubt } => {
                if trimmed.is_empty() {
                    span.push((*line).to_string());
                } else if looks_like_code(line) {
                    span.push((*line).to_string());
                    state = ScanState::InCode { doubt: 0 };
                } else if is_definitely_prose(line) {
                    // Prose ends the span right away; the line stays outside.
                    flush_span(&mut span, &mut out);
                    out.push((*line).to_string());
                    state = ScanState::Plain;
                } else {
                    // Ambiguous: keep it in the span but lose confidence.
                    span.push((*line).to_string());
                    let doubt = doubt + 1;
                    if doubt >= MAX_DOUBT {
                        flush_span(&mut span, &mut out);
                        state = ScanState::Plain;
                    } else {
                        state = ScanState::InCode { doubt };
                    }
                }
            }
        }
    }

    flush_span(&mut span, &mut out);
    out.join("\n")
}

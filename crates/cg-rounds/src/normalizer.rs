//! Comment stripping and effective line counting.
//!
//! Pattern based, not a tokenizer: comment markers inside string literals
//! are stripped too. The output only feeds a length heuristic and the
//! last-chance display copy.

use std::sync::LazyLock;

use cg_core::language::{CommentStyle, comment_style};
use regex::Regex;

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)/\*.*?\*/"));
static SLASH_COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"//[^\n]*"));
static DOUBLE_DOCSTRING: LazyLock<Regex> = LazyLock::new(|| compile(r#"(?s)""".*?""""#));
static SINGLE_DOCSTRING: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)'''.*?'''"));
static HASH_COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"#[^\n]*"));
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"\n(?:[ \t]*\n){2,}"));
static LEADING_BLANKS: LazyLock<Regex> = LazyLock::new(|| compile(r"\A(?:[ \t]*\n)+"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern compiles")
}

/// Remove comments for `language` (a label from
/// [`cg_core::language::language_from_path`]), collapse runs of blank lines
/// to a single blank line, and drop leading blank lines.
#[must_use]
pub fn strip_comments(code: &str, language: &str) -> String {
    let style = comment_style(language);
    let mut text = code.replace("\r\n", "\n");
    // Removing a comment can splice its neighbours into a new marker, so
    // repeat until nothing changes. A pass never grows the text.
    loop {
        let next = strip_pass(&text, style);
        if next == text {
            break;
        }
        text = next;
    }
    let collapsed = BLANK_RUN.replace_all(&text, "\n\n");
    LEADING_BLANKS.replace(&collapsed, "").into_owned()
}

fn strip_pass(code: &str, style: CommentStyle) -> String {
    match style {
        CommentStyle::CFamily => strip_c_family(code),
        CommentStyle::Hash => strip_hash_family(code),
        CommentStyle::Unknown => strip_hash_family(&strip_c_family(code)),
    }
}

fn strip_c_family(code: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(code, "");
    SLASH_COMMENT.replace_all(&without_blocks, "").into_owned()
}

fn strip_hash_family(code: &str) -> String {
    let text = DOUBLE_DOCSTRING.replace_all(code, "");
    let text = SINGLE_DOCSTRING.replace_all(&text, "");
    HASH_COMMENT.replace_all(&text, "").into_owned()
}

/// Lines with any non-whitespace content.
#[must_use]
pub fn count_code_lines(code: &str) -> usize {
    code.lines().filter(|line| !line.trim().is_empty()).count()
}

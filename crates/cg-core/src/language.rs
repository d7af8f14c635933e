//! File-extension → language mapping.
//!
//! The extension set is closed: a file is a sampling candidate only if its
//! extension is listed here, and the label it maps to is what the normalizer
//! and the judge receive.

/// Label returned for any extension outside the recognized set.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Recognized code extensions and their language labels.
pub const LANGUAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("js", "JavaScript"),
    ("jsx", "JavaScript (React)"),
    ("ts", "TypeScript"),
    ("tsx", "TypeScript (React)"),
    ("py", "Python"),
    ("rb", "Ruby"),
    ("java", "Java"),
    ("go", "Go"),
    ("c", "C"),
    ("cpp", "C++"),
    ("cs", "C#"),
    ("php", "PHP"),
    ("rs", "Rust"),
];

/// How comments are written in a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* ... */` blocks and `// ...` lines.
    CFamily,
    /// Triple-quoted docstrings and `# ...` lines.
    Hash,
    /// Language not recognized: both rule sets apply.
    Unknown,
}

/// Map a bare extension (without the dot) to a language label.
///
/// Matching is case-insensitive. Returns [`UNKNOWN_LANGUAGE`] for anything
/// outside [`LANGUAGE_EXTENSIONS`].
#[must_use]
pub fn language_for_extension(ext: &str) -> &'static str {
    LANGUAGE_EXTENSIONS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map_or(UNKNOWN_LANGUAGE, |(_, language)| language)
}

/// Language label for a repository path, derived from its file name's
/// extension.
#[must_use]
pub fn language_from_path(path: &str) -> &'static str {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name
        .rsplit_once('.')
        .map_or(UNKNOWN_LANGUAGE, |(_, ext)| language_for_extension(ext))
}

/// Whether a file name carries a recognized code extension.
#[must_use]
pub fn is_code_file(name: &str) -> bool {
    language_from_path(name) != UNKNOWN_LANGUAGE
}

/// Comment family for a language label.
#[must_use]
pub fn comment_style(language: &str) -> CommentStyle {
    match language {
        "JavaScript" | "JavaScript (React)" | "TypeScript" | "TypeScript (React)" | "Java"
        | "Go" | "C" | "C++" | "C#" | "PHP" | "Rust" => CommentStyle::CFamily,
        "Python" | "Ruby" => CommentStyle::Hash,
        _ => CommentStyle::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn every_recognized_extension_has_a_label() {
        for (ext, _) in LANGUAGE_EXTENSIONS {
            assert_ne!(language_for_extension(ext), UNKNOWN_LANGUAGE, "{ext}");
            assert_ne!(
                language_for_extension(&ext.to_uppercase()),
                UNKNOWN_LANGUAGE,
                "{ext} uppercase"
            );
        }
    }

    #[rstest]
    #[case("md")]
    #[case("json")]
    #[case("yml")]
    #[case("h")]
    #[case("")]
    #[case("jsx2")]
    fn other_extensions_are_unknown(#[case] ext: &str) {
        assert_eq!(language_for_extension(ext), UNKNOWN_LANGUAGE);
    }

    #[rstest]
    #[case("src/lib.rs", "Rust")]
    #[case("app/Component.TSX", "TypeScript (React)")]
    #[case("setup.py", "Python")]
    #[case("Makefile", UNKNOWN_LANGUAGE)]
    #[case("docs.v2/README", UNKNOWN_LANGUAGE)]
    #[case("archive.tar.gz", UNKNOWN_LANGUAGE)]
    fn language_from_path_uses_file_extension(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(language_from_path(path), expected);
    }

    #[test]
    fn is_code_file_follows_extension_map() {
        assert!(is_code_file("index.js"));
        assert!(is_code_file("main.go"));
        assert!(!is_code_file("README.md"));
        assert!(!is_code_file("LICENSE"));
    }

    #[test]
    fn comment_style_families() {
        assert_eq!(comment_style("Rust"), CommentStyle::CFamily);
        assert_eq!(comment_style("TypeScript (React)"), CommentStyle::CFamily);
        assert_eq!(comment_style("Python"), CommentStyle::Hash);
        assert_eq!(comment_style("Ruby"), CommentStyle::Hash);
        assert_eq!(comment_style(UNKNOWN_LANGUAGE), CommentStyle::Unknown);
    }
}

//! Code-fence language registry.
//!
//! Notion's code blocks accept a fixed, closed set of language names. The
//! registry is a pair of static tables (shorthand aliases and the
//! supported set) plus [`normalize`], which resolves any fence tag to a
//! canonical supported name. Both tables are public so callers and tests
//! can assert against them directly instead of re-deriving the mapping.

/// Fallback language for empty, unknown, or unsupported fence tags.
pub const PLAIN_TEXT: &str = "plain text";

/// Shorthand fence tags mapped to their canonical names.
///
/// Every target on the right-hand side is a member of
/// [`SUPPORTED_LANGUAGES`].
pub const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("rb", "ruby"),
    ("sh", "bash"),
    ("yml", "yaml"),
    ("md", "markdown"),
    ("mgt", "plain text"),
    ("txt", "plain text"),
    ("text", "plain text"),
    ("", "plain text"),
];

/// The closed set of language names the remote API accepts.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "abap",
    "abc",
    "agda",
    "arduino",
    "ascii art",
    "assembly",
    "bash",
    "basic",
    "bnf",
    "c",
    "c#",
    "c++",
    "clojure",
    "coffeescript",
    "coq",
    "css",
    "dart",
    "dhall",
    "diff",
    "docker",
    "ebnf",
    "elixir",
    "elm",
    "erlang",
    "f#",
    "flow",
    "fortran",
    "gherkin",
    "glsl",
    "go",
    "graphql",
    "groovy",
    "haskell",
    "hcl",
    "html",
    "idris",
    "java",
    "java/c/c++/c#",
    "javascript",
    "json",
    "julia",
    "kotlin",
    "latex",
    "less",
    "lisp",
    "livescript",
    "llvm ir",
    "lua",
    "makefile",
    "markdown",
    "markup",
    "mathematica",
    "matlab",
    "mermaid",
    "nix",
    "notion formula",
    "objective-c",
    "ocaml",
    "pascal",
    "perl",
    "php",
    "plain text",
    "powershell",
    "prolog",
    "protobuf",
    "purescript",
    "python",
    "r",
    "racket",
    "reason",
    "ruby",
    "rust",
    "sass",
    "scala",
    "scheme",
    "scss",
    "shell",
    "smalltalk",
    "solidity",
    "sql",
    "swift",
    "toml",
    "typescript",
    "vb.net",
    "verilog",
    "vhdl",
    "visual basic",
    "webassembly",
    "xml",
    "yaml",
];

/// Resolve a fence tag to a canonical supported language name.
///
/// Matching is case-insensitive: the tag is alias-resolved first, then
/// validated against [`SUPPORTED_LANGUAGES`]. Anything that falls through
/// both tables collapses to [`PLAIN_TEXT`].
///
/// ```rust
/// use notepress_core::lang;
///
/// assert_eq!(lang::normalize("py"), "python");
/// assert_eq!(lang::normalize("Rust"), "rust");
/// assert_eq!(lang::normalize(""), "plain text");
/// assert_eq!(lang::normalize("mgt"), "plain text");
/// ```
pub fn normalize(tag: &str) -> &'static str {
    if let Some(&(_, canonical)) = LANGUAGE_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(tag))
    {
        return canonical;
    }

    SUPPORTED_LANGUAGES
        .iter()
        .find(|name| name.eq_ignore_ascii_case(tag))
        .copied()
        .unwrap_or(PLAIN_TEXT)
}

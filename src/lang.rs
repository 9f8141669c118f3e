//! Language detection from file extensions

use std::path::Path;

/// Languages recognized by the inspector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Python,
    JavaScript,
    TypeScript,
    Jsx,
    Tsx,
    Html,
    Css,
    Scss,
    Json,
    Markdown,
    Java,
    Ruby,
    Go,
    Rust,
    Php,
    C,
    Cpp,
    CSharp,
    /// Sentinel for any extension not in [`EXTENSION_TABLE`]
    Unknown,
}

/// Extension-to-language lookup table (lowercase, with leading separator)
pub const EXTENSION_TABLE: &[(&str, Lang)] = &[
    (".py", Lang::Python),
    (".js", Lang::JavaScript),
    (".ts", Lang::TypeScript),
    (".jsx", Lang::Jsx),
    (".tsx", Lang::Tsx),
    (".html", Lang::Html),
    (".css", Lang::Css),
    (".scss", Lang::Scss),
    (".json", Lang::Json),
    (".md", Lang::Markdown),
    (".java", Lang::Java),
    (".rb", Lang::Ruby),
    (".go", Lang::Go),
    (".rs", Lang::Rust),
    (".php", Lang::Php),
    (".c", Lang::C),
    (".cpp", Lang::Cpp),
    (".cs", Lang::CSharp),
];

impl Lang {
    /// Detect language from file path extension
    ///
    /// Leading dots of the file name never start an extension, so `.bashrc`
    /// and `..py` are `Unknown` while `.eslintrc.js` is JavaScript.
    pub fn from_path(path: &Path) -> Self {
        extension_of(path)
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }

    /// Detect language from an extension string.
    ///
    /// The leading `.` is optional and the comparison is case-insensitive.
    /// Never fails: unrecognized input maps to [`Lang::Unknown`].
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_lowercase();
        let ext = ext.strip_prefix('.').unwrap_or(&ext);
        if ext.is_empty() {
            return Self::Unknown;
        }

        EXTENSION_TABLE
            .iter()
            .find(|(key, _)| key.trim_start_matches('.') == ext)
            .map(|(_, lang)| *lang)
            .unwrap_or(Self::Unknown)
    }

    /// Get the display label of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Jsx => "React JSX",
            Self::Tsx => "React TSX",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Scss => "SCSS",
            Self::Json => "JSON",
            Self::Markdown => "Markdown",
            Self::Java => "Java",
            Self::Ruby => "Ruby",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Php => "PHP",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Unknown => "Unknown",
        }
    }

    /// Get the language family for shared extraction logic
    pub fn family(&self) -> LangFamily {
        match self {
            Self::Python => LangFamily::Python,
            Self::JavaScript | Self::TypeScript | Self::Jsx | Self::Tsx => LangFamily::JavaScript,
            Self::Html | Self::Css | Self::Scss | Self::Markdown => LangFamily::Markup,
            Self::Json => LangFamily::Config,
            Self::Java => LangFamily::Java,
            Self::Ruby => LangFamily::Ruby,
            Self::Go => LangFamily::Go,
            Self::Rust => LangFamily::Rust,
            Self::Php => LangFamily::Php,
            Self::C | Self::Cpp => LangFamily::CFamily,
            Self::CSharp => LangFamily::CSharp,
            Self::Unknown => LangFamily::Unknown,
        }
    }

    /// Check if imports, functions and classes are extracted for this language
    pub fn supports_extraction(&self) -> bool {
        self.family().supports_extraction()
    }

    /// Get the extension registered for this language, if any
    pub fn extension(&self) -> Option<&'static str> {
        EXTENSION_TABLE
            .iter()
            .find(|(_, lang)| lang == self)
            .map(|(ext, _)| *ext)
    }
}

/// Extension of the final path component, including its leading `.`
fn extension_of(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let stem_start = name.len() - name.trim_start_matches('.').len();
    let dot = name[stem_start..].rfind('.')?;
    Some(&name[stem_start + dot..])
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Language families for grouping similar extraction logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LangFamily {
    /// Python
    Python,
    /// JavaScript, TypeScript, JSX, TSX
    JavaScript,
    /// HTML, CSS, SCSS, Markdown
    Markup,
    /// JSON
    Config,
    Java,
    Ruby,
    Go,
    Rust,
    Php,
    /// C and C++
    CFamily,
    CSharp,
    Unknown,
}

impl LangFamily {
    /// Get the canonical name of the language family
    pub fn name(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Markup => "markup",
            Self::Config => "config",
            Self::Java => "java",
            Self::Ruby => "ruby",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Php => "php",
            Self::CFamily => "c_family",
            Self::CSharp => "csharp",
            Self::Unknown => "unknown",
        }
    }

    /// Only the Python and JavaScript families carry extraction rules
    pub fn supports_extraction(&self) -> bool {
        matches!(self, Self::Python | Self::JavaScript)
    }
}

//! File classification: extension -> category -> group
//!
//! Every table here is an exhaustive `match`, so adding a category without
//! giving it a glyph and a group is a compile error.

use std::fmt;

/// Semantic kind of a file, in legend/enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Code,
    Notebook,
    Data,
    Compressed,
    Cache,
    Image,
    Video,
    Audio,
    Document,
    Config,
    Other,
}

impl Category {
    /// All categories in enumeration order.
    pub const ALL: [Category; 11] = [
        Category::Code,
        Category::Notebook,
        Category::Data,
        Category::Compressed,
        Category::Cache,
        Category::Image,
        Category::Video,
        Category::Audio,
        Category::Document,
        Category::Config,
        Category::Other,
    ];

    /// Upper-case label used in reports (`CODE`, `NOTEBOOK`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Category::Code => "CODE",
            Category::Notebook => "NOTEBOOK",
            Category::Data => "DATA",
            Category::Compressed => "COMPRESSED",
            Category::Cache => "CACHE",
            Category::Image => "IMAGE",
            Category::Video => "VIDEO",
            Category::Audio => "AUDIO",
            Category::Document => "DOCUMENT",
            Category::Config => "CONFIG",
            Category::Other => "OTHER",
        }
    }

    /// Glyph used in detailed mode; distinct per category.
    pub fn detailed_glyph(self) -> char {
        match self {
            Category::Code => '█',
            Category::Notebook => '▓',
            Category::Data => '▒',
            Category::Compressed => '◆',
            Category::Cache => '·',
            Category::Image => '◐',
            Category::Video => '◢',
            Category::Audio => '◇',
            Category::Document => '○',
            Category::Config => '☰',
            Category::Other => '.',
        }
    }

    /// Glyph used in simplified mode; related categories share one.
    pub fn simplified_glyph(self) -> char {
        match self {
            Category::Code | Category::Notebook => '█',
            Category::Data => '▒',
            Category::Compressed => '◆',
            Category::Cache => '·',
            Category::Image | Category::Video | Category::Audio => '◐',
            Category::Document => '○',
            Category::Config => '☰',
            Category::Other => '.',
        }
    }

    pub fn group(self) -> CategoryGroup {
        match self {
            Category::Code | Category::Notebook => CategoryGroup::Code,
            Category::Data | Category::Compressed => CategoryGroup::Data,
            Category::Cache | Category::Config => CategoryGroup::System,
            Category::Image | Category::Video | Category::Audio | Category::Document => {
                CategoryGroup::Media
            }
            Category::Other => CategoryGroup::Other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse bucket aggregating categories for the simplified legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryGroup {
    Code,
    Media,
    Data,
    System,
    Other,
}

impl CategoryGroup {
    /// All groups in legend order.
    pub const ALL: [CategoryGroup; 5] = [
        CategoryGroup::Code,
        CategoryGroup::Media,
        CategoryGroup::Data,
        CategoryGroup::System,
        CategoryGroup::Other,
    ];

    pub fn description(self) -> &'static str {
        match self {
            CategoryGroup::Code => "Code/Notebook files",
            CategoryGroup::Media => "Media/Documents",
            CategoryGroup::Data => "Data/Compressed files",
            CategoryGroup::System => "Cache/Build/Config files",
            CategoryGroup::Other => "Other files",
        }
    }

    /// Symbol shown next to the group in the simplified legend.
    pub fn legend_glyph(self) -> char {
        match self {
            CategoryGroup::Code => Category::Code.simplified_glyph(),
            CategoryGroup::Media => Category::Document.simplified_glyph(),
            CategoryGroup::Data => Category::Data.simplified_glyph(),
            CategoryGroup::System => Category::Cache.simplified_glyph(),
            CategoryGroup::Other => Category::Other.simplified_glyph(),
        }
    }
}

/// Classify a file by its full name, falling back to its extension.
///
/// Well-known build and tooling files (`Makefile`, `Dockerfile`, ...) and
/// configuration dot-files match on the exact, case-sensitive name first.
pub fn classify(file_name: &str) -> Category {
    if let Some(category) = category_for_file_name(file_name) {
        return category;
    }
    extension_of(file_name).map_or(Category::Other, category_for_extension)
}

/// The extension of a file name including its leading dot, as written.
///
/// Leading dots belong to the stem, so `.bashrc` and `..foo` have no
/// extension.
pub fn extension_of(file_name: &str) -> Option<&str> {
    match file_name.rfind('.') {
        Some(pos) if file_name[..pos].bytes().any(|b| b != b'.') => Some(&file_name[pos..]),
        _ => None,
    }
}

fn category_for_file_name(file_name: &str) -> Option<Category> {
    match file_name {
        "Dockerfile" | "docker-compose.yml" | "Makefile" | "CMakeLists.txt"
        | "requirements.txt" | "setup.py" | "setup.cfg" | "pyproject.toml" | "package.json"
        | "tsconfig.json" | "tox.ini" | ".gitignore" | ".dockerignore" | ".editorconfig"
        | ".prettierrc" | ".eslintrc" | ".babelrc" | ".npmrc" | ".yarnrc" | ".flake8"
        | ".coveragerc" | ".travis.yml" | ".gitlab-ci.yml" | ".github" => Some(Category::Config),
        _ => None,
    }
}

/// Category for an extension such as `.py` or `.PY`; unknown -> `Other`.
pub fn category_for_extension(ext: &str) -> Category {
    let lower = ext.to_ascii_lowercase();
    match lower.as_str() {
        ".py" | ".js" | ".ts" | ".java" | ".cpp" | ".c" | ".h" | ".rs" | ".go" | ".rb" | ".php"
        | ".cs" | ".swift" | ".kt" | ".scala" | ".r" | ".sh" | ".bash" | ".zsh" | ".fish"
        | ".vim" | ".lua" | ".pl" | ".pm" | ".t" | ".sql" => Category::Code,
        ".ipynb" | ".rmd" | ".qmd" => Category::Notebook,
        ".csv" | ".tsv" | ".json" | ".yaml" | ".yml" | ".xml" | ".toml" | ".ini" | ".conf"
        | ".cfg" | ".properties" | ".env" | ".sqlite" | ".db" | ".parquet" | ".avro" | ".orc"
        | ".feather" | ".arrow" | ".hdf5" | ".h5" | ".nc" | ".mat" | ".pkl" | ".pickle"
        | ".npy" | ".npz" => Category::Data,
        ".zip" | ".tar" | ".gz" | ".bz2" | ".xz" | ".7z" | ".rar" | ".tgz" | ".tbz2" => {
            Category::Compressed
        }
        ".pyc" | ".pyo" | ".pyd" | ".class" | ".o" | ".so" | ".dll" | ".dylib" | ".cache"
        | ".swp" | ".swo" | ".swn" => Category::Cache,
        ".jpg" | ".jpeg" | ".png" | ".gif" | ".bmp" | ".tiff" | ".webp" | ".svg" | ".ico"
        | ".eps" | ".raw" | ".cr2" | ".nef" | ".heic" => Category::Image,
        ".mp4" | ".avi" | ".mkv" | ".mov" | ".wmv" | ".flv" | ".webm" | ".m4v" | ".mpg"
        | ".mpeg" | ".3gp" => Category::Video,
        ".mp3" | ".wav" | ".flac" | ".m4a" | ".ogg" | ".aac" | ".wma" | ".aiff" | ".opus" => {
            Category::Audio
        }
        ".pdf" | ".doc" | ".docx" | ".xls" | ".xlsx" | ".ppt" | ".pptx" | ".odt" | ".ods"
        | ".odp" | ".pages" | ".numbers" | ".keynote" | ".txt" | ".rtf" | ".md" | ".rst"
        | ".tex" | ".html" | ".htm" | ".epub" | ".mobi" | ".azw3" => Category::Document,
        ".config" => Category::Config,
        _ => Category::Other,
    }
}

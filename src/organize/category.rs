//! Extension-to-folder mapping.

use std::path::Path;

use strum_macros::EnumIter;

/// Destination folder a file is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Category {
    /// `.html` pages
    Html,
    /// `.css` stylesheets
    Css,
    /// `.js` scripts
    Js,
    /// Raster and vector images, icons
    Images,
    /// Anything not matched by another rule
    Others,
}

impl Category {
    /// Name of the folder created under the organized directory.
    pub fn folder_name(self) -> &'static str {
        match self {
            Category::Html => "html",
            Category::Css => "css",
            Category::Js => "js",
            Category::Images => "images",
            Category::Others => "others",
        }
    }
}

/// One row of the mapping: a set of extensions (lowercase, no dot) and the
/// category they map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    /// Extensions matched by this rule
    pub extensions: &'static [&'static str],
    /// Category assigned on match
    pub category: Category,
}

/// The fixed mapping, checked in order. Extensions not listed fall through
/// to [`Category::Others`].
pub const DEFAULT_RULES: &[CategoryRule] = &[
    CategoryRule {
        extensions: &["html"],
        category: Category::Html,
    },
    CategoryRule {
        extensions: &["css"],
        category: Category::Css,
    },
    CategoryRule {
        extensions: &["js"],
        category: Category::Js,
    },
    CategoryRule {
        extensions: &["jpg", "jpeg", "png", "gif", "svg", "ico"],
        category: Category::Images,
    },
];

/// Ordered, immutable extension table with a catch-all.
///
/// The first rule containing a file's extension wins; if none does, the
/// fallback category is used, so every file maps to exactly one category.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    rules: Vec<CategoryRule>,
    fallback: Category,
}

impl CategoryMap {
    /// Builds a map from explicit rules and a catch-all category.
    pub fn new(rules: Vec<CategoryRule>, fallback: Category) -> Self {
        Self { rules, fallback }
    }

    /// Rules in match order.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Category used when no rule matches.
    pub fn fallback(&self) -> Category {
        self.fallback
    }

    /// Classifies a bare extension, case-insensitively. A leading dot is ignored.
    pub fn classify_extension(&self, extension: &str) -> Category {
        let extension = extension.trim_start_matches('.').to_lowercase();
        if extension.is_empty() {
            return self.fallback;
        }
        self.rules
            .iter()
            .find(|rule| rule.extensions.contains(&extension.as_str()))
            .map(|rule| rule.category)
            .unwrap_or(self.fallback)
    }

    /// Classifies a file by the extension of its name.
    ///
    /// Names without an extension (including dotfiles such as `.gitignore`)
    /// and names that are not valid UTF-8 go to the fallback.
    pub fn classify(&self, path: &Path) -> Category {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.classify_extension(ext),
            None => self.fallback,
        }
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec(), Category::Others)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_folder_names_are_distinct() {
        let names: Vec<&str> = Category::iter().map(Category::folder_name).collect();
        assert_eq!(names, vec!["html", "css", "js", "images", "others"]);
    }

    #[test]
    fn test_default_map_classifies_fixed_extensions() {
        let map = CategoryMap::default();
        assert_eq!(map.classify(Path::new("index.html")), Category::Html);
        assert_eq!(map.classify(Path::new("site.css")), Category::Css);
        assert_eq!(map.classify(Path::new("app.js")), Category::Js);
        for name in ["a.jpg", "a.jpeg", "a.png", "a.gif", "a.svg", "a.ico"] {
            assert_eq!(map.classify(Path::new(name)), Category::Images, "{name}");
        }
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        let map = CategoryMap::default();
        assert_eq!(map.classify(Path::new("PHOTO.PNG")), Category::Images);
        assert_eq!(map.classify(Path::new("Shot.JpG")), Category::Images);
        assert_eq!(map.classify(Path::new("PAGE.HTML")), Category::Html);
    }

    #[test]
    fn test_unlisted_and_missing_extensions_fall_back() {
        let map = CategoryMap::default();
        assert_eq!(map.classify(Path::new("notes.txt")), Category::Others);
        assert_eq!(map.classify(Path::new("README")), Category::Others);
        assert_eq!(map.classify(Path::new(".gitignore")), Category::Others);
        assert_eq!(map.classify(Path::new("trailing.")), Category::Others);
        // Only the last extension counts
        assert_eq!(map.classify(Path::new("page.html.bak")), Category::Others);
        assert_eq!(map.classify(Path::new("bundle.min.js")), Category::Js);
        // Similar but distinct extensions do not match
        assert_eq!(map.classify(Path::new("page.htm")), Category::Others);
        assert_eq!(map.classify(Path::new("module.mjs")), Category::Others);
    }

    #[test]
    fn test_classify_extension_ignores_leading_dot() {
        let map = CategoryMap::default();
        assert_eq!(map.classify_extension(".CSS"), Category::Css);
        assert_eq!(map.classify_extension("css"), Category::Css);
        assert_eq!(map.classify_extension(""), Category::Others);
        assert_eq!(map.classify_extension("."), Category::Others);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let map = CategoryMap::new(
            vec![
                CategoryRule {
                    extensions: &["svg"],
                    category: Category::Others,
                },
                CategoryRule {
                    extensions: &["svg", "png"],
                    category: Category::Images,
                },
            ],
            Category::Html,
        );
        assert_eq!(map.classify(Path::new("logo.svg")), Category::Others);
        assert_eq!(map.classify(Path::new("logo.png")), Category::Images);
        assert_eq!(map.classify(Path::new("logo.bmp")), Category::Html);
        assert_eq!(map.fallback(), Category::Html);
        assert_eq!(map.rules().len(), 2);
    }
}

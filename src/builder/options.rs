/// Switches for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Fold `typedef struct {..} Name;` into the record instead of adding a typedef.
    pub auto_squash_typedef: bool,
    pub parse_comments: bool,
    pub parse_attributes: bool,
    /// When off, macro definitions are skipped without diagnostics.
    pub parse_macros: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            auto_squash_typedef: true,
            parse_comments: true,
            parse_attributes: true,
            parse_macros: true,
        }
    }
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_squash_typedef(mut self, enabled: bool) -> Self {
        self.auto_squash_typedef = enabled;
        self
    }

    pub fn with_parse_comments(mut self, enabled: bool) -> Self {
        self.parse_comments = enabled;
        self
    }

    pub fn with_parse_attributes(mut self, enabled: bool) -> Self {
        self.parse_attributes = enabled;
        self
    }

    pub fn with_parse_macros(mut self, enabled: bool) -> Self {
        self.parse_macros = enabled;
        self
    }
}

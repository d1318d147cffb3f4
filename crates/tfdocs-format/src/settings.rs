//! Rendering switches shared by every formatter.

/// Print settings. `Default` matches the host tool's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Escape markdown control characters in names and descriptions.
    pub escape: bool,
    /// Heading level of top-level sections in markdown and asciidoc.
    pub indent: usize,
    pub show_anchor: bool,
    /// Emit ANSI colour codes (pretty formatter only).
    pub show_color: bool,
    pub show_default: bool,
    pub show_header: bool,
    pub show_required: bool,
    pub show_sensitive: bool,
    pub show_type: bool,
    pub sort_by_name: bool,
    pub sort_by_required: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            escape: true,
            indent: 2,
            show_anchor: true,
            show_color: true,
            show_default: true,
            show_header: true,
            show_required: true,
            show_sensitive: true,
            show_type: true,
            sort_by_name: true,
            sort_by_required: false,
        }
    }
}

//! Output configuration types

const DEFAULT_INDENT_WIDTH: usize = 2;

/// Configuration for table rendering.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Spaces of indent per hierarchy level.
    pub indent_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

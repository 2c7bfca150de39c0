//! Tree printer configuration.

/// Options for [`crate::printer::print_program`].
#[derive(Debug, Clone)]
pub struct PrintConfig {
    /// Indentation width (in spaces) per tree level.
    pub indent_width: usize,
    /// Append `@line:column` to every node.
    pub show_positions: bool,
    /// Add trailing newline.
    pub trailing_newline: bool,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_positions: false,
            trailing_newline: true,
        }
    }
}

impl PrintConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width.
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Show node positions.
    pub fn show_positions(mut self, show: bool) -> Self {
        self.show_positions = show;
        self
    }

    /// Set whether to add a trailing newline.
    pub fn trailing_newline(mut self, trailing: bool) -> Self {
        self.trailing_newline = trailing;
        self
    }
}

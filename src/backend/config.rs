//! Rendering configuration

/// Class name used when the caller does not pick one.
pub const DEFAULT_CLASS_NAME: &str = "MlgenExample";

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Number of values per line in numeric array literals
    pub values_per_line: usize,
    /// Name of the generated class
    pub class_name: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            values_per_line: 8,
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the number of values per array line (at least one)
    pub fn with_values_per_line(mut self, count: usize) -> Self {
        self.values_per_line = count.max(1);
        self
    }

    /// Set the generated class name
    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.values_per_line, 8);
        assert_eq!(config.class_name, DEFAULT_CLASS_NAME);
    }

    #[test]
    fn test_values_per_line_never_zero() {
        assert_eq!(RenderConfig::new().with_values_per_line(0).values_per_line, 1);
    }

    #[test]
    fn test_builder_chain() {
        let config = RenderConfig::new().with_indent_width(2).with_class_name("Iris");
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.class_name, "Iris");
    }
}

// src/reader/config.rs

/// Options for decoding SXF files
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Maximum nesting of overview images inside datasets. Real files nest at
    /// most one level; deeper chains are treated as malformed input.
    pub max_recursion_depth: usize,
}

impl DecodeOptions {
    pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 8;

    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_recursion_depth: Self::DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}

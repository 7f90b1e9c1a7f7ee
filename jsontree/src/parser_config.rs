// SPDX-License-Identifier: Apache-2.0

/// Nesting limit used by [`ParserConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Runtime limits for [`TreeParser`](crate::TreeParser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of simultaneously open containers. The root counts
    /// as one.
    pub max_depth: usize,
}

impl ParserConfig {
    pub const fn new() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

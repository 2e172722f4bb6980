//! Configuration for leap-day insertion.

/// Configuration for [`insert_leap_days`](crate::insert_leap_days).
///
/// Defaults match the upstream classification pipeline: 365-record year
/// blocks and a `nan` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertConfig {
    block_len: usize,
    placeholder: String,
}

impl Default for InsertConfig {
    fn default() -> Self {
        Self {
            block_len: 365,
            placeholder: "nan".to_string(),
        }
    }
}

impl InsertConfig {
    /// Creates a configuration with the default block length (365) and
    /// placeholder (`nan`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the year-block length. Useful for tests; production series
    /// always use 365.
    pub fn with_block_len(mut self, block_len: usize) -> Self {
        self.block_len = block_len;
        self
    }

    /// Sets the placeholder record inserted into leap blocks.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Returns the year-block length.
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Returns the placeholder record value.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = InsertConfig::new();
        assert_eq!(config.block_len(), 365);
        assert_eq!(config.placeholder(), "nan");
    }

    #[test]
    fn builder_overrides() {
        let config = InsertConfig::new()
            .with_block_len(10)
            .with_placeholder("-999");
        assert_eq!(config.block_len(), 10);
        assert_eq!(config.placeholder(), "-999");
    }
}

//! Parser configuration and its builder.

/// What to do when a frame, signal or node attribute block name appears twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the last definition and record a diagnostic.
    #[default]
    Overwrite,
    /// Fail the parse with [`Error::DuplicateName`](crate::Error::DuplicateName).
    Reject,
}

/// Configuration for LDF parsing.
#[derive(Debug, Clone, Default)]
pub struct ParseConfig {
    /// Handling of repeated frame, signal and attribute names.
    /// Default: [`DuplicatePolicy::Overwrite`]
    pub duplicate_policy: DuplicatePolicy,

    /// Treat end of text as the closing brace of a section that is never closed.
    /// Default: false (an unterminated section is an error)
    pub allow_truncated: bool,

    /// Turn statement-level problems into fatal errors instead of diagnostics.
    /// Cross-reference gaps (unused encodings, undefined signals) stay non-fatal.
    /// Default: false
    pub strict: bool,
}

/// Builder for [`LdfParser`](crate::LdfParser) configuration.
#[derive(Debug, Default)]
pub struct LdfParserBuilder {
    config: ParseConfig,
}

impl LdfParserBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how duplicate names are handled.
    ///
    /// Default: [`DuplicatePolicy::Overwrite`]
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    /// Set whether a section missing its closing brace runs to end of text.
    ///
    /// Default: false
    pub fn allow_truncated(mut self, enabled: bool) -> Self {
        self.config.allow_truncated = enabled;
        self
    }

    /// Set whether malformed statements abort the parse.
    ///
    /// When disabled, malformed frame, signal, encoding and attribute
    /// statements are skipped and reported through
    /// [`Ldf::diagnostics`](crate::Ldf::diagnostics).
    ///
    /// Default: false
    pub fn strict(mut self, enabled: bool) -> Self {
        self.config.strict = enabled;
        self
    }

    /// Finish configuration without building a parser.
    pub fn config(self) -> ParseConfig {
        self.config
    }

    /// Build an empty parser using this configuration.
    pub fn build(self) -> crate::LdfParser {
        crate::LdfParser::with_config(self.config)
    }
}

use std::path::{Path, PathBuf};

use crate::{Error, Ldf, Result, config::LdfParserBuilder, config::ParseConfig};

/// Loading state of an [`LdfParser`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum State {
    /// Nothing loaded yet.
    #[default]
    Empty,
    /// Raw text read, not parsed yet.
    Loaded(String),
    /// Text parsed; the raw text has been released.
    Parsed(Ldf),
}

impl State {
    /// Whether text has been read (and possibly parsed).
    pub fn is_loaded(&self) -> bool {
        !matches!(self, State::Empty)
    }

    /// Whether a complete document is available.
    pub fn is_parsed(&self) -> bool {
        matches!(self, State::Parsed(_))
    }

    /// The parsed document, if any.
    pub fn document(&self) -> Option<&Ldf> {
        match self {
            State::Parsed(ldf) => Some(ldf),
            _ => None,
        }
    }

    /// Advance `Loaded` to `Parsed`; other states are returned unchanged.
    fn parse(self, config: &ParseConfig) -> Result<State> {
        match self {
            State::Loaded(text) => Ldf::parse_with_config(&text, config).map(State::Parsed),
            other => Ok(other),
        }
    }
}

/// Check the path and read the text of an `.ldf` file.
///
/// The extension is checked before the file system is touched.
pub(crate) fn read_ldf_file(path: &Path) -> Result<String> {
    let is_ldf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ldf"));
    if !is_ldf {
        return Err(Error::InvalidFileType(path.display().to_string()));
    }
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Loads LDF files and keeps the most recently parsed document.
///
/// Every successful [`set_file`](LdfParser::set_file) or
/// [`set_text`](LdfParser::set_text) replaces the whole document. A load that
/// fails leaves the previous state untouched.
///
/// # Example
///
/// ```no_run
/// use ldf_rs::{DuplicatePolicy, LdfParser, Result};
///
/// fn main() -> Result<()> {
///     let mut parser = LdfParser::builder()
///         .duplicate_policy(DuplicatePolicy::Reject)
///         .build();
///     parser.set_file("body.ldf")?;
///
///     if let Some(ldf) = parser.document() {
///         for (name, frame) in ldf.frames_by_publisher("ECU") {
///             println!("{name}: id {:#x}, {} bytes", frame.id, frame.length);
///         }
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LdfParser {
    config: ParseConfig,
    state: State,
    current_file: Option<PathBuf>,
}

impl LdfParser {
    /// Create an empty parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty parser with `config`.
    pub fn with_config(config: ParseConfig) -> Self {
        Self {
            config,
            state: State::Empty,
            current_file: None,
        }
    }

    /// Start configuring a parser.
    pub fn builder() -> LdfParserBuilder {
        LdfParserBuilder::new()
    }

    /// Create a parser and load `path` with the default configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut parser = Self::new();
        parser.set_file(path)?;
        Ok(parser)
    }

    /// Read and parse `path`, replacing the current document.
    ///
    /// # Errors
    /// * [`Error::InvalidFileType`] if the extension is not `ldf` (any case);
    ///   nothing is read in that case.
    /// * [`Error::FileNotFound`] if the path does not exist.
    /// * Any parse error from [`Ldf::parse_with_config`].
    pub fn set_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = read_ldf_file(path)?;
        self.commit(State::Loaded(text))?;
        self.current_file = Some(path.to_path_buf());
        Ok(())
    }

    /// Parse in-memory LDF text, replacing the current document.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.commit(State::Loaded(text.into()))?;
        self.current_file = None;
        Ok(())
    }

    fn commit(&mut self, loaded: State) -> Result<()> {
        self.state = loaded.parse(&self.config)?;
        Ok(())
    }

    /// Current loading state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Whether text has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// Whether a parsed document is available.
    pub fn is_parsed(&self) -> bool {
        self.state.is_parsed()
    }

    /// The parsed document, if any.
    pub fn document(&self) -> Option<&Ldf> {
        self.state.document()
    }

    /// Take the parsed document out of the parser.
    pub fn into_document(self) -> Option<Ldf> {
        match self.state {
            State::Parsed(ldf) => Some(ldf),
            _ => None,
        }
    }

    /// Path of the file behind the current document.
    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Configuration used for every parse.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "
Nodes { Master: ECU, 5 ms, 0.1 ms; Slaves: Door1, Door2; }
Frames { DoorCmd: 0x10, ECU, 1 { DoorLock, 0; } }
Signals { DoorLock: 1, 0, ECU, Door1; }
Node_attributes { Door1 { configured_NAD = 0x01; } }
";

    #[test]
    fn test_state_transitions() {
        let mut parser = LdfParser::new();
        assert_eq!(parser.state(), &State::Empty);
        assert!(!parser.is_loaded());
        assert!(parser.document().is_none());

        parser.set_text(MINIMAL).unwrap();
        assert!(parser.is_loaded());
        assert!(parser.is_parsed());
        assert_eq!(parser.document().unwrap().nodes().master, "ECU");
        assert!(parser.current_file().is_none());
    }

    #[test]
    fn test_failed_parse_keeps_previous_document() {
        let mut parser = LdfParser::new();
        parser.set_text(MINIMAL).unwrap();
        let before = parser.document().cloned();

        let err = parser.set_text("Nodes { Master: ECU; Slaves: A; }").unwrap_err();
        assert!(matches!(err, Error::SectionNotFound { section } if section == "Frames"));
        assert_eq!(parser.document().cloned(), before);
    }

    #[test]
    fn test_loaded_state_parses() {
        let state = State::Loaded(MINIMAL.to_string());
        assert!(state.is_loaded());
        assert!(!state.is_parsed());
        let parsed = state.parse(&ParseConfig::default()).unwrap();
        assert!(parsed.is_parsed());
        assert_eq!(State::Empty.parse(&ParseConfig::default()).unwrap(), State::Empty);
    }

    #[test]
    fn test_invalid_extension_is_checked_first() {
        let err = read_ldf_file(Path::new("/definitely/missing/bus.txt")).unwrap_err();
        assert!(matches!(err, Error::InvalidFileType(_)));
        let err = read_ldf_file(Path::new("/definitely/missing/bus.LDF")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}

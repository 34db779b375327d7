//! Outline error types.

/// Specific error conditions for outline and chapter operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutlineErrorKind {
    /// Normalization retained zero well-formed chapter lines
    EmptyOutline,
    /// World setting file does not exist where the strategy requires it
    MissingWorldSetting(String),
    /// Requested chapter range does not intersect the outline
    InvalidRange {
        /// 1-based inclusive start of the requested range
        start: usize,
        /// Inclusive end of the requested range
        end: usize,
        /// Number of lines in the outline
        available: usize,
    },
}

impl std::fmt::Display for OutlineErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutlineErrorKind::EmptyOutline => {
                write!(f, "Outline contains no well-formed chapter lines")
            }
            OutlineErrorKind::MissingWorldSetting(path) => {
                write!(f, "World setting file not found: {}", path)
            }
            OutlineErrorKind::InvalidRange {
                start,
                end,
                available,
            } => write!(
                f,
                "Chapter range {}..={} is outside the outline of {} lines",
                start, end, available
            ),
        }
    }
}

/// Error type for outline and chapter operations.
///
/// # Examples
///
/// ```
/// use feuilleton_error::{OutlineError, OutlineErrorKind};
///
/// let err = OutlineError::new(OutlineErrorKind::EmptyOutline);
/// assert!(format!("{}", err).contains("no well-formed"));
/// ```
#[derive(Debug, Clone)]
pub struct OutlineError {
    /// The specific error condition
    pub kind: OutlineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl OutlineError {
    /// Create a new OutlineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OutlineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for OutlineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Outline Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for OutlineError {}

use std::fmt;

/// A script together with the name it should be reported under.
///
/// `Source` owns the raw text handed to the pipeline and the optional file
/// name used in diagnostics. Input read from standard input has no name and
/// is reported under the `STDIN` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    name: Option<String>,
    text: String,
}

impl Source {
    /// Wraps a script for interpretation.
    ///
    /// # Parameters
    /// - `text`: The complete source text.
    /// - `name`: File name for diagnostics, or `None` for unnamed input.
    #[must_use]
    pub fn new(text: impl Into<String>, name: Option<&str>) -> Self {
        Self { name: name.map(str::to_string),
               text: text.into(), }
    }

    /// The raw source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The name this source is reported under: the file name, or `STDIN`
    /// for unnamed input.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("STDIN")
    }

    /// The text of the given 1-based line, without its trailing newline.
    /// Lines past the end of the text render as empty.
    #[must_use]
    pub fn line_text(&self, line: usize) -> &str {
        self.text.lines().nth(line.saturating_sub(1)).unwrap_or("")
    }

    /// Resolves a bare position into a [`Location`] that can render a
    /// complete diagnostic on its own.
    #[must_use]
    pub fn location(&self, position: Position) -> Location {
        Location { file: self.display_name().to_string(),
                   position,
                   source_line: self.line_text(position.line).to_string(), }
    }
}

/// A point in the source text, 1-based in both coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number within the line, starting at 1.
    pub column: usize,
}

/// A fully resolved source position.
///
/// Unlike [`Position`], a `Location` owns everything a diagnostic needs:
/// the display name of the file (or `STDIN`), the line and column, and the
/// text of the offending line. Errors carry a `Location` so they render
/// without access to the original [`Source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Display name of the originating file, or `STDIN`.
    pub file:        String,
    /// Line and column of the offending character or token.
    pub position:    Position,
    /// The text of the offending source line.
    pub source_line: String,
}

impl Location {
    /// Renders the offending source line with a caret marker under the
    /// failing column:
    ///
    /// ```text
    ///     a = 5 $ 3;
    ///           ^
    /// ```
    #[must_use]
    pub fn annotated_line(&self) -> String {
        format!("{}\n{:>width$}", self.source_line, '^', width = self.position.column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.position.line, self.position.column)
    }
}

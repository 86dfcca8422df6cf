use crate::source::Location;

/// The single runtime failure: reading a variable that was never assigned.
///
/// Raised while evaluating a `Variable` node whose name is absent from the
/// global scope. Assignment can never fail, so this is the only error the
/// interpreter produces once a program has parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct NameError {
    /// The variable name that was read.
    pub name:     String,
    /// Where the read occurred.
    pub location: Location,
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{}: error: variable used before assignment: {}\n{}",
               self.location,
               self.name,
               self.location.annotated_line())
    }
}

impl std::error::Error for NameError {}

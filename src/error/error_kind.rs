/// Describes an application specific error types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Error caused by invalid input from the caller, e.g. a due time in the past.
    ClientError,
    /// Unknown error.
    Unknown,
}

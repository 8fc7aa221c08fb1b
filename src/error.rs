/// Application-level error.
///
/// Every variant reaches the user as a one-line message on stderr and a
/// process exit code of 1. Per-date fetch failures (`RequestFailed`,
/// `MalformedResponse`) are usually demoted to warnings by the aggregation
/// loop instead of surfacing here.
#[derive(Clone, PartialEq, Eq)]
pub enum AppError {
    /// The HTTP request could not be sent, or came back non-2xx.
    RequestFailed(String),
    /// The response body could not be interpreted as rate data.
    MalformedResponse(String),
    /// A lookup date was not a well-formed `YYYY-MM-DD` date.
    InvalidDateFormat(String),
    /// More than the permitted number of lookup dates were supplied.
    TooManyDates(usize),
    /// A range endpoint was malformed, or start was after end.
    InvalidRange(String),
    /// Clamping a range to the availability window left no dates.
    EmptyRange(String),
    /// A security description matched nothing in the catalog.
    UnknownSecurity(String),
    /// Both requested securities resolved to the same catalog entry.
    DuplicateSecurity(String),
    /// A configuration override from the environment was malformed.
    Config(String),
    /// Reading or writing the terminal failed.
    Io(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::RequestFailed(msg) => write!(f, "API request failed: {msg}"),
            AppError::MalformedResponse(msg) => write!(f, "Malformed API response: {msg}"),
            AppError::InvalidDateFormat(input) => {
                write!(f, "Invalid date format '{input}'. Use YYYY-MM-DD.")
            }
            AppError::TooManyDates(n) => {
                write!(f, "Maximum of 5 dates allowed for lookup (got {n}).")
            }
            AppError::InvalidRange(msg) => write!(f, "{msg}"),
            AppError::EmptyRange(msg) => write!(f, "{msg}"),
            AppError::UnknownSecurity(input) => write!(
                f,
                "Invalid security description: '{input}'. \
                 Use the 'list-securities' command to see valid options."
            ),
            AppError::DuplicateSecurity(desc) => {
                write!(f, "Security 1 and Security 2 cannot be the same ('{desc}').")
            }
            AppError::Config(msg) => write!(f, "Invalid configuration: {msg}"),
            AppError::Io(msg) => write!(f, "Terminal I/O failed: {msg}"),
        }
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AppError({self})")
    }
}

impl std::error::Error for AppError {}

//! Error handling.
//!
//! Errors are split the same way the extraction pipeline is:
//! - **Processing errors** (`OpenGraphError`): the page URL or the HTML stream
//!   could not be used. These are fatal to a `parse` call.
//! - **Initialization errors** (`InitializationError`): the binary failed to set
//!   up logging.
//!
//! Problems with individual tags (missing attributes, empty content, non-numeric
//! dimensions) are not errors. Interpreters skip them and the walk continues.

mod types;

// Re-export public API
pub use types::{InitializationError, OpenGraphError};

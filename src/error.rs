//! # Error Types
//!
//! Transposing and rendering never fail: unrecognized chords are passed
//! through. Errors only come from the edges of the crate, where settings are
//! parsed and files are read or written.
//!
//! ## Error Types
//! - `Settings` - Malformed YAML/JSON transpose settings
//! - `Io` - A file could not be read or written
//! - `InvalidOffset` - A semitone offset that is not an integer
//!
//! ## Usage
//! ```rust
//! use tabshift::{TabError, TransposeSettings};
//!
//! match TransposeSettings::from_yaml("transpose: [1, 2]") {
//!     Ok(settings) => println!("offset {}", settings.label()),
//!     Err(TabError::Settings(message)) => eprintln!("bad settings: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    /// Settings document could not be parsed.
    ///
    /// # Example
    /// ```
    /// # use tabshift::TabError;
    /// let err = TabError::Settings("transpose: invalid type".to_string());
    /// assert_eq!(err.to_string(), "Invalid settings: transpose: invalid type");
    /// ```
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// File read or write failure.
    ///
    /// # Example
    /// ```
    /// # use tabshift::TabError;
    /// let err = TabError::Io {
    ///     path: "song.txt".to_string(),
    ///     message: "No such file or directory".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Cannot access 'song.txt': No such file or directory");
    /// ```
    #[error("Cannot access '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Invalid semitone offset: {0}")]
    InvalidOffset(String),
}

impl TabError {
    pub fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        TabError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}

/*!
Errors reported by a mesh rebuild
*/

/// Everything that can make a rebuild fail. A failed rebuild never produces a partial mesh.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// The configuration cannot be used (non-positive cell size, non-finite threshold, grid too large...)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// One of the blobs has a non-finite position, or a negative or non-finite radius parameter
    #[error("blob #{index} is invalid: {reason}")]
    InvalidSource {
        /// Position of the blob in the source slice
        index: usize,
        /// What is wrong with it
        reason: String,
    },
    /// A sample point coincides with a blob center, and the configured policy rejects it
    #[error("sample at ({}, {}, {}) coincides with a blob center", .point[0], .point[1], .point[2])]
    DegenerateSample {
        /// World position of the sample
        point: [f64; 3],
    },
    /// The rebuild was cancelled through its cancellation flag
    #[error("mesh rebuild was cancelled")]
    Cancelled,
}

/// Shorthand for results of fallible rebuild operations
pub type Result<T> = std::result::Result<T, MeshError>;

//! Error types for raster stream generation.
//!
//! Everything here is a hard, non-transient failure: either the caller
//! supplied a bad identifier/image, or a capability check rejected a
//! command under the strict policy.

use thiserror::Error;

/// Main error type for raster conversion and instruction encoding.
#[derive(Error, Debug)]
pub enum Error {
    /// The printer model identifier is not in the capability table.
    #[error("Unknown printer model: {0}")]
    UnknownModel(String),

    /// The label/media identifier is not in the label table.
    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    /// A command was requested that the selected model's firmware does
    /// not implement.
    ///
    /// Surfaced only under [`Policy::Strict`](crate::Policy); the warn
    /// policy logs and skips the command instead.
    #[error("Command not supported on this model: {0}")]
    UnsupportedCommand(String),

    /// Image dimensions are incompatible with the fixed label geometry.
    ///
    /// For die-cut media the input aspect ratio must match the label's
    /// printable area within 1%. Outside that tolerance the image is
    /// rejected rather than silently distorted.
    #[error("Bad image dimensions: {got:?}, expected {expected:?}")]
    BadImageDimensions { got: (u32, u32), expected: (u32, u32) },

    /// A pixel plane handed to the encoder is not as wide as the print
    /// head. Indicates a preprocessing bug, not a user error.
    #[error("Wrong pixel width: {got}, expected {expected}")]
    PixelWidthMismatch { got: u32, expected: u32 },

    /// The black and red planes of a two-color page differ in size.
    #[error("Plane dimensions differ: {first:?} vs {second:?}")]
    PlaneDimensionMismatch {
        first: (u32, u32),
        second: (u32, u32),
    },

    /// The source image could not be decoded.
    #[error(transparent)]
    UnreadableImage(#[from] image::ImageError),

    /// Explicit rotation requests must be a multiple of 90 degrees.
    #[error("Unsupported rotation: {0} degrees (must be a multiple of 90)")]
    UnsupportedRotation(u16),
}

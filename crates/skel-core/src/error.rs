//! Error types for the `skel` thinning engine.
//!
//! Three Rust enums for three kinds of failure: configuration mistakes
//! made before `run()`, precondition violations detected (or left
//! undefined, per the contract) at the image boundary, and internal
//! invariant violations that indicate a bug rather than bad input.

use std::error::Error;
use std::fmt;

/// Something required to construct or run the engine was missing or
/// invalid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No input image was supplied.
    MissingImage,
    /// No ordering image was supplied.
    MissingOrdering,
    /// The `(n, k)` connectivity descriptor is missing or out of range
    /// (requires `0 <= k < n`).
    InvalidConnectivity {
        /// The dimension that was requested.
        n: usize,
        /// The cell dimension that was requested.
        k: usize,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingImage => write!(f, "no input image configured"),
            Self::MissingOrdering => write!(f, "no ordering image configured"),
            Self::InvalidConnectivity { n, k } => {
                write!(f, "invalid connectivity (n={n}, k={k}): requires 0 <= k < n")
            }
        }
    }
}

impl Error for ConfigurationError {}

/// A precondition of the algorithm was violated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreconditionViolated {
    /// The foreground object touches the domain boundary. Thinning near
    /// an unbounded edge is not topologically well-defined.
    BoundaryTouchingForeground {
        /// The offending coordinate.
        at: crate::Coord,
    },
    /// The ordering image's domain does not match the input image's
    /// domain.
    OrderingDimensionMismatch,
    /// `foregroundValue == backgroundValue`, which makes every voxel
    /// simultaneously foreground and background.
    PixelValueAliasing,
}

impl fmt::Display for PreconditionViolated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundaryTouchingForeground { at } => {
                write!(f, "foreground voxel at {at:?} touches the domain boundary")
            }
            Self::OrderingDimensionMismatch => {
                write!(f, "ordering image domain does not match input image domain")
            }
            Self::PixelValueAliasing => {
                write!(f, "foreground value and background value must differ")
            }
        }
    }
}

impl Error for PreconditionViolated {}

/// A bug: an invariant the algorithm relies on did not hold.
///
/// These are never expected to occur. They are kept distinct from
/// [`ConfigurationError`] and [`PreconditionViolated`] because, unlike
/// those, there is no user-facing fix — encountering one means the
/// engine (or a pluggable predicate) violated its own contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InternalInvariant {
    /// A topological number came out as zero at a point that was
    /// enqueued as a genuine border voxel, which cannot happen: the
    /// foreground component containing the center is always counted.
    ZeroTopologicalNumberAtBorderVoxel {
        /// The offending coordinate.
        at: crate::Coord,
    },
}

impl fmt::Display for InternalInvariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTopologicalNumberAtBorderVoxel { at } => write!(
                f,
                "internal invariant violated: zero topological number at border voxel {at:?}"
            ),
        }
    }
}

impl Error for InternalInvariant {}

/// Unified error surfaced at the engine boundary. The thinning loop
/// itself never recovers from an error and never retries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkeletonizeError {
    /// See [`ConfigurationError`].
    Configuration(ConfigurationError),
    /// See [`PreconditionViolated`].
    Precondition(PreconditionViolated),
    /// See [`InternalInvariant`].
    Internal(InternalInvariant),
}

impl fmt::Display for SkeletonizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "{e}"),
            Self::Precondition(e) => write!(f, "{e}"),
            Self::Internal(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SkeletonizeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            Self::Precondition(e) => Some(e),
            Self::Internal(e) => Some(e),
        }
    }
}

impl From<ConfigurationError> for SkeletonizeError {
    fn from(e: ConfigurationError) -> Self {
        Self::Configuration(e)
    }
}

impl From<PreconditionViolated> for SkeletonizeError {
    fn from(e: PreconditionViolated) -> Self {
        Self::Precondition(e)
    }
}

impl From<InternalInvariant> for SkeletonizeError {
    fn from(e: InternalInvariant) -> Self {
        Self::Internal(e)
    }
}

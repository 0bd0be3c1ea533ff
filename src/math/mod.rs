//! Vector and rotation math used by the simulation engine.
//!
//! Both types are immutable values: every operation returns a new value.
//! Operator assignment forms (`+=`, `-=`, `*=`) are defined in terms of the
//! value-returning operations so the two can never disagree.

mod quaternion;
mod vector;

pub use quaternion::Quaternion;
pub use vector::Vector3;

/// Failures raised by degenerate geometry.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("vector has zero length")]
    DegenerateVector,

    #[error("rotation axis has zero length")]
    DegenerateAxis,

    #[error("quaternion has zero norm")]
    ZeroNorm,
}

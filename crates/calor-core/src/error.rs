//! Error types for the Calor kernel library.
//!
//! Two enums, organized by subsystem: [`GridError`] for container
//! construction, [`KernelError`] for precondition violations reported by the
//! kernels themselves. Every contract the original C routines left to caller
//! discipline (buffer length, grid shape, non-degenerate axes) is checked
//! here and surfaced as a descriptive error instead of undefined behavior.

use std::error::Error;
use std::fmt;

/// Errors from [`Grid2D`](crate::Grid2D) construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// One of the grid dimensions is zero.
    EmptyGrid,
    /// A dimension exceeds the maximum addressable size.
    DimensionTooLarge {
        /// Which axis (`"nx"` or `"ny"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The maximum permitted value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid dimensions must be non-zero"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid dimension {name}={value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for GridError {}

/// Precondition violations reported by kernel entry points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KernelError {
    /// An output buffer is shorter than the requested element count.
    BufferTooSmall {
        /// Elements the caller asked the kernel to produce.
        needed: usize,
        /// Actual length of the buffer supplied.
        len: usize,
    },
    /// Input and output arrays have different lengths.
    LengthMismatch {
        /// Input array length.
        input: usize,
        /// Output array length.
        output: usize,
    },
    /// Two grids that must be same-shaped are not.
    ShapeMismatch {
        /// Shape of the first grid as `(nx, ny)`.
        expected: (u32, u32),
        /// Shape of the second grid as `(nx, ny)`.
        actual: (u32, u32),
    },
    /// An axis must span more than one point to define a spacing.
    DegenerateAxis {
        /// Which axis (`"nx"` or `"ny"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// A scalar parameter is NaN, infinite, or outside its permitted range.
    InvalidParameter {
        /// Which parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Integer sequence generation overflowed the element type.
    Overflow {
        /// Index of the first element that does not fit.
        index: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { needed, len } => {
                write!(f, "buffer too small: need {needed} elements, have {len}")
            }
            Self::LengthMismatch { input, output } => {
                write!(
                    f,
                    "length mismatch: input has {input} elements, output has {output}"
                )
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "shape mismatch: {}x{} vs {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::DegenerateAxis { name, value } => {
                write!(f, "axis {name}={value} must exceed 1 to define a spacing")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "parameter {name}={value} must be finite and in range")
            }
            Self::Overflow { index } => {
                write!(f, "sequence overflows u64 at index {index}")
            }
        }
    }
}

impl Error for KernelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_error_display() {
        assert_eq!(
            GridError::EmptyGrid.to_string(),
            "grid dimensions must be non-zero"
        );
        let e = GridError::DimensionTooLarge {
            name: "nx",
            value: u32::MAX,
            max: i32::MAX as u32,
        };
        assert!(e.to_string().contains("nx"));
    }

    #[test]
    fn kernel_error_display_mentions_fields() {
        let e = KernelError::BufferTooSmall { needed: 10, len: 3 };
        assert!(e.to_string().contains("10"));
        assert!(e.to_string().contains('3'));

        let e = KernelError::ShapeMismatch {
            expected: (4, 5),
            actual: (4, 6),
        };
        assert!(e.to_string().contains("4x5"));
        assert!(e.to_string().contains("4x6"));

        let e = KernelError::DegenerateAxis {
            name: "ny",
            value: 1,
        };
        assert!(e.to_string().contains("ny"));

        let e = KernelError::Overflow { index: 93 };
        assert!(e.to_string().contains("93"));
    }
}

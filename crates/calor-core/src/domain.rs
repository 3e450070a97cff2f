//! Rectangular physical domain for grid initialisation.

use crate::error::KernelError;

/// An axis-aligned rectangular domain `[xmin, xmax] x [ymin, ymax]`.
///
/// Bounds must be finite; nothing requires `xmax > xmin`, matching the
/// original routine, which happily produces a negative spacing for an
/// inverted interval. Fields are private so every `Domain` has passed
/// through [`Domain::new`]'s validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Domain {
    /// Create a domain, rejecting non-finite bounds.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, KernelError> {
        for (name, value) in [
            ("xmin", xmin),
            ("xmax", xmax),
            ("ymin", ymin),
            ("ymax", ymax),
        ] {
            if !value.is_finite() {
                return Err(KernelError::InvalidParameter { name, value });
            }
        }
        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    /// The unit square `[0, 1] x [0, 1]`.
    pub fn unit_square() -> Self {
        Self {
            xmin: 0.0,
            xmax: 1.0,
            ymin: 0.0,
            ymax: 1.0,
        }
    }

    /// Lower x bound.
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Upper x bound.
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Lower y bound.
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Upper y bound.
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Uniform spacing `(dx, dy)` for an `nx x ny` grid covering the domain.
    ///
    /// Both axes must exceed 1; otherwise the spacing divides by zero, so a
    /// degenerate axis is rejected with [`KernelError::DegenerateAxis`].
    pub fn spacing(&self, nx: u32, ny: u32) -> Result<(f64, f64), KernelError> {
        if nx < 2 {
            return Err(KernelError::DegenerateAxis {
                name: "nx",
                value: nx,
            });
        }
        if ny < 2 {
            return Err(KernelError::DegenerateAxis {
                name: "ny",
                value: ny,
            });
        }
        let dx = (self.xmax - self.xmin) / f64::from(nx - 1);
        let dy = (self.ymax - self.ymin) / f64::from(ny - 1);
        Ok((dx, dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan_bound() {
        assert!(matches!(
            Domain::new(0.0, f64::NAN, 0.0, 1.0),
            Err(KernelError::InvalidParameter { name: "xmax", .. })
        ));
    }

    #[test]
    fn rejects_infinite_bound() {
        assert!(matches!(
            Domain::new(f64::NEG_INFINITY, 1.0, 0.0, 1.0),
            Err(KernelError::InvalidParameter { name: "xmin", .. })
        ));
    }

    #[test]
    fn accessors_return_constructed_bounds() {
        let d = Domain::new(-1.0, 2.0, 0.5, 3.5).unwrap();
        assert_eq!(d.xmin(), -1.0);
        assert_eq!(d.xmax(), 2.0);
        assert_eq!(d.ymin(), 0.5);
        assert_eq!(d.ymax(), 3.5);
    }

    #[test]
    fn unit_square_spacing() {
        let d = Domain::unit_square();
        let (dx, dy) = d.spacing(5, 11).unwrap();
        assert_eq!(dx, 0.25);
        assert_eq!(dy, 0.1);
    }

    #[test]
    fn spacing_rejects_single_point_axis() {
        let d = Domain::unit_square();
        assert_eq!(
            d.spacing(1, 5),
            Err(KernelError::DegenerateAxis {
                name: "nx",
                value: 1
            })
        );
        assert_eq!(
            d.spacing(5, 1),
            Err(KernelError::DegenerateAxis {
                name: "ny",
                value: 1
            })
        );
    }

    #[test]
    fn inverted_interval_gives_negative_spacing() {
        let d = Domain::new(1.0, 0.0, 0.0, 1.0).unwrap();
        let (dx, _) = d.spacing(3, 3).unwrap();
        assert_eq!(dx, -0.5);
    }
}

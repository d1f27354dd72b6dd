//! Piecewise-linear interpolation over strictly increasing knots.
//!
//! [`LinearInterpolant`] is the numerical inverse used to recover temperature
//! from enthalpy: the enthalpy integral of a heat-capacity polynomial has no
//! closed-form inverse, so it is sampled on a temperature grid and the
//! (enthalpy, temperature) pairs are interpolated with enthalpy as the
//! independent variable.
//!
//! Queries outside the knot range extrapolate linearly from the first or last
//! segment.

use thiserror::Error;

/// Errors that can occur while building an interpolant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolateError {
    /// Fewer than two knots were provided.
    #[error("at least 2 samples are required, got {samples}")]
    TooFewSamples { samples: usize },

    /// The knot and value arrays have different lengths.
    #[error("knot count {knots} does not match value count {values}")]
    LengthMismatch { knots: usize, values: usize },

    /// The sampling interval is empty, reversed, or not finite.
    #[error("empty sampling range: [{low}, {high}]")]
    EmptyRange { low: f64, high: f64 },

    /// The knots are not strictly increasing.
    ///
    /// For a temperature inverse this means the enthalpy is not monotonic in
    /// temperature over the sampled range (the heat capacity changed sign).
    #[error("knots are not strictly increasing at index {index}: {previous} then {next}")]
    NotMonotonic {
        index: usize,
        previous: f64,
        next: f64,
    },
}

/// A degree-1 interpolant through `(x[i], y[i])` with strictly increasing `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolant {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LinearInterpolant {
    /// Builds an interpolant from knots `x` and values `y`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolateError`] if fewer than two knots are provided, the
    /// lengths differ, or `x` is not strictly increasing.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, InterpolateError> {
        if x.len() != y.len() {
            return Err(InterpolateError::LengthMismatch {
                knots: x.len(),
                values: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(InterpolateError::TooFewSamples { samples: x.len() });
        }

        // `!(b > a)` also rejects NaN knots.
        if let Some(index) = x.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(InterpolateError::NotMonotonic {
                index: index + 1,
                previous: x[index],
                next: x[index + 1],
            });
        }

        Ok(Self { x, y })
    }

    /// Evaluates the interpolant at `x`.
    ///
    /// Exact knot hits return the stored value unchanged.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match self.x.binary_search_by(|knot| knot.total_cmp(&x)) {
            Ok(i) => self.y[i],
            Err(i) => {
                let last = self.x.len() - 1;
                let i = i.clamp(1, last);
                let (x0, x1) = (self.x[i - 1], self.x[i]);
                let (y0, y1) = (self.y[i - 1], self.y[i]);
                y0 + (x - x0) * (y1 - y0) / (x1 - x0)
            }
        }
    }

    /// Returns true if `x` lies within the knot range (inclusive).
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        let (low, high) = self.domain();
        (low..=high).contains(&x)
    }

    /// Returns the first and last knots.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Returns the knots.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.x
    }

    /// Returns the values at the knots.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.y
    }
}

/// Returns `samples` equally spaced points over `[low, high]`.
///
/// The last point is exactly `high`, so a function sampled on the grid is
/// evaluated at both endpoints without rounding drift.
///
/// # Errors
///
/// Returns [`InterpolateError`] if `samples < 2` or the range is empty.
pub fn linspace(low: f64, high: f64, samples: usize) -> Result<Vec<f64>, InterpolateError> {
    if samples < 2 {
        return Err(InterpolateError::TooFewSamples { samples });
    }
    if !(low.is_finite() && high.is_finite() && high > low) {
        return Err(InterpolateError::EmptyRange { low, high });
    }

    #[allow(clippy::cast_precision_loss)]
    let step = (high - low) / (samples - 1) as f64;

    #[allow(clippy::cast_precision_loss)]
    let mut grid: Vec<f64> = (0..samples).map(|i| low + step * i as f64).collect();
    grid[samples - 1] = high;

    Ok(grid)
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// CubicBezierEasing
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// A CSS-style unit cubic bezier easing curve.
///
/// The curve runs from (0, 0) to (1, 1) with two control points; `eval` maps
/// elapsed progress on the x axis to eased progress on the y axis by solving
/// the curve parameter with Newton iteration, falling back to bisection when
/// the derivative degenerates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezierEasing {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f64 = 1e-7;

impl CubicBezierEasing {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    /// The settle curve the wheel uses: fast start, long gentle tail.
    pub fn spin_settle() -> Self {
        Self::new(0.23, 1.0, 0.32, 1.0)
    }

    /// Eased progress for `progress` in `[0, 1]`; input outside that range is
    /// clamped.
    pub fn eval(&self, progress: f64) -> f64 {
        let x = progress.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        let t = self.solve_t_for_x(x);
        sample(t, self.y1, self.y2)
    }

    fn solve_t_for_x(&self, x: f64) -> f64 {
        // Newton-Raphson from a linear guess.
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = sample(t, self.x1, self.x2) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = sample_derivative(t, self.x1, self.x2);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            t -= error / slope;
        }

        // Bisection fallback; x(t) is monotone on [0, 1] for clamped control
        // points.
        let (mut lo, mut hi) = (0.0f64, 1.0f64);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let error = sample(t, self.x1, self.x2) - x;
            if error.abs() < SOLVE_EPSILON {
                break;
            }
            if error > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }
}

/// Evaluates the one-dimensional unit bezier with control values `p1`, `p2`.
fn sample(t: f64, p1: f64, p2: f64) -> f64 {
    // Horner form of 3*(1-t)^2*t*p1 + 3*(1-t)*t^2*p2 + t^3
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn sample_derivative(t: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

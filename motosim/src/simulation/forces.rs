//! Acceleration contributors for the ride model
//!
//! The total acceleration is the sum of a base polynomial in time and one
//! pulse per route event. Each contributor implements [`Acceleration`] and
//! [`AccelSet`] adds them up at any requested time, not only at integrator
//! step points.

/// Trait for scalar acceleration sources depending only on time
pub trait Acceleration {
    fn acceleration(&self, t: f64) -> f64;
}

/// Base acceleration `a0 + a1 t + a2 t^2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePolynomial {
    pub a0: f64, // constant term (m/s^2)
    pub a1: f64, // linear term (m/s^3)
    pub a2: f64, // quadratic term (m/s^4)
}

impl BasePolynomial {
    /// Constant acceleration, the only form the scenario files use in practice
    pub fn constant(a0: f64) -> Self {
        Self { a0, a1: 0.0, a2: 0.0 }
    }
}

impl Acceleration for BasePolynomial {
    fn acceleration(&self, t: f64) -> f64 {
        self.a0 + self.a1 * t + self.a2 * t * t
    }
}

/// Collection of acceleration terms (base polynomial, route events, ...)
/// Each term implements [`Acceleration`] and their contributions are summed
/// in insertion order, so repeated evaluation is bit-for-bit reproducible
#[derive(Default)]
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Number of registered terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total acceleration at time `t`
    pub fn total(&self, t: f64) -> f64 {
        self.terms.iter().map(|term| term.acceleration(t)).sum()
    }

    /// Uniform samples `(t, a(t))` of the total acceleration over `[0, duration]`,
    /// `points + 1` pairs. Empty when `duration <= 0` or `points == 0`
    pub fn sample(&self, duration: f64, points: usize) -> Vec<(f64, f64)> {
        if !(duration > 0.0) || points == 0 {
            return Vec::new();
        }
        (0..=points)
            .map(|i| {
                let t = duration * i as f64 / points as f64;
                (t, self.total(t))
            })
            .collect()
    }
}

impl std::fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelSet").field("terms", &self.terms.len()).finish()
    }
}

//! A single binary threshold neuron: its weights, its activation function, and the rule used to
//! adjust its weights after a misclassification.

use std::{fmt, ops::Index};

use crate::random::RandomSource;

/// The weighted sum of the inputs must be strictly greater than this value for the neuron to fire.
pub const ACTIVATION_THRESHOLD: f64 = 1.0;

/// The scalar controlling the magnitude of each weight adjustment.
pub const LEARNING_RATE: f64 = 0.2;

/// The binary output of the neuron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    /// The weighted sum did not exceed the threshold.
    Low,
    /// The weighted sum exceeded the threshold.
    High,
}

impl Activation {
    /// The numeric value of the activation, `0.0` or `1.0`.
    pub fn value(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::High => 1.0,
        }
    }
}

impl From<bool> for Activation {
    fn from(fired: bool) -> Self {
        if fired {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Whether the neuron classified a training case correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The activation matched the expected output.
    Correct,
    /// The activation differed from the expected output.
    Incorrect,
}

impl Outcome {
    /// Compare the actual activation against the expected one.
    pub fn of(expected: Activation, actual: Activation) -> Self {
        if expected == actual {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    /// Check if the case was classified correctly.
    pub fn is_correct(self) -> bool {
        self == Self::Correct
    }

    /// The score of the outcome, `1.0` when correct and `0.0` otherwise.
    pub fn value(self) -> f64 {
        match self {
            Self::Correct => 1.0,
            Self::Incorrect => 0.0,
        }
    }
}

/// The learned parameters of the neuron, one weight per input dimension.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Weights(Vec<f64>);

impl Weights {
    /// Create a weight vector from the given values.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Get the number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there is no weight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Weights {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for Weights {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl Index<usize> for Weights {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Create a weight vector of the given length with every weight drawn independently from the
/// source.
pub fn init_weights<S>(dimensions: usize, source: &mut S) -> Weights
where
    S: RandomSource + ?Sized,
{
    assert!(dimensions > 0, "a neuron needs at least one input");
    Weights((0..dimensions).map(|_| source.next_value()).collect())
}

/// Applies the neuron to the given input.
///
/// # Panics
///
/// Panics if the input and the weights do not have the same length.
pub fn activate(inputs: &[f64], weights: &Weights) -> Activation {
    assert_eq!(inputs.len(), weights.len());
    let sum: f64 = inputs.iter().zip(&weights.0).map(|(x, w)| x * w).sum();
    Activation::from(sum > ACTIVATION_THRESHOLD)
}

/// Adjusts every weight by [`LEARNING_RATE`] times the error between the expected and the actual
/// activation.
pub fn adjust(weights: Weights, expected: Activation, actual: Activation) -> Weights {
    adjust_with_rate(weights, expected, actual, LEARNING_RATE)
}

/// Adjusts every weight by `rate` times the error between the expected and the actual activation.
///
/// The same delta is applied to every weight regardless of the input that fed it.
pub fn adjust_with_rate(
    mut weights: Weights,
    expected: Activation,
    actual: Activation,
    rate: f64,
) -> Weights {
    let delta = rate * (expected.value() - actual.value());
    for w in &mut weights.0 {
        *w += delta;
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float_eq(lhs: f64, rhs: f64) -> bool {
        (lhs - rhs).abs() <= 1e-12
    }

    struct Counter(f64);

    impl RandomSource for Counter {
        fn next_value(&mut self) -> f64 {
            self.0 += 0.25;
            self.0
        }
    }

    struct Constant(f64);

    impl RandomSource for Constant {
        fn next_value(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn init_weights_shape() {
        let mut source = Counter(0.0);
        for n in 2..=7 {
            let w = init_weights(n, &mut source);
            assert_eq!(w.len(), n);
            let first = w[0];
            assert!(
                w.as_slice().iter().any(|x| *x != first),
                "all weights equal for {n}"
            );
        }
    }

    #[test]
    fn init_weights_takes_draws_as_is() {
        let w = init_weights(3, &mut Constant(1.5));
        assert_eq!(w, Weights::from([1.5, 1.5, 1.5]));
    }

    #[test]
    #[should_panic]
    fn init_weights_zero_dimensions() {
        init_weights(0, &mut Constant(1.0));
    }

    #[test]
    fn activation_threshold() {
        let w = Weights::from([0.6, 0.6]);
        assert_eq!(activate(&[1.0, 1.0], &w), Activation::High);
        assert_eq!(activate(&[0.0, 0.0], &w), Activation::Low);
        assert_eq!(activate(&[1.0, 0.0], &w), Activation::Low);
        // A sum equal to the threshold does not fire.
        let w = Weights::from([0.5, 0.5]);
        assert_eq!(activate(&[1.0, 1.0], &w), Activation::Low);
    }

    #[test]
    fn activation_is_dimension_generic() {
        let w = Weights::from([0.4, 0.4, 0.4]);
        assert_eq!(activate(&[1.0, 1.0, 1.0], &w), Activation::High);
        assert_eq!(activate(&[1.0, 1.0, 0.0], &w), Activation::Low);
    }

    #[test]
    #[should_panic]
    fn activation_mismatched_lengths() {
        activate(&[1.0, 1.0, 1.0], &Weights::from([0.6, 0.6]));
    }

    #[test]
    fn adjust_rule() {
        let w = adjust(Weights::from([0.5, 0.5]), Activation::High, Activation::Low);
        assert!(float_eq(w[0], 0.7));
        assert!(float_eq(w[1], 0.7));

        let w = adjust(Weights::from([0.5, 1.5]), Activation::Low, Activation::High);
        assert!(float_eq(w[0], 0.3));
        assert!(float_eq(w[1], 1.3));

        let w = Weights::from([0.5, 0.5]);
        assert_eq!(adjust(w.clone(), Activation::Low, Activation::Low), w);
    }

    #[test]
    fn outcome_of_activations() {
        assert_eq!(
            Outcome::of(Activation::High, Activation::High),
            Outcome::Correct
        );
        assert_eq!(
            Outcome::of(Activation::High, Activation::Low),
            Outcome::Incorrect
        );
        assert_eq!(Outcome::Correct.value(), 1.0);
        assert_eq!(Outcome::Incorrect.value(), 0.0);
    }
}

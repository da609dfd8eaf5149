//! Data structures and methods for dealing with training sets.

use crate::{error::PerceptronError, neuron::Activation};

/// A single case within a training set, mapping an input vector to the expected activation.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingCase {
    /// The input data.
    pub input: Vec<f64>,
    /// The expected output.
    pub expect: Activation,
}

impl TrainingCase {
    /// Create a new case.
    pub fn new(input: impl Into<Vec<f64>>, expect: Activation) -> Self {
        Self {
            input: input.into(),
            expect,
        }
    }
}

/// An ordered, non-empty list of training cases sharing the same input dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    cases: Vec<TrainingCase>,
    dimensions: usize,
}

impl TrainingSet {
    /// Create a training set, checking that it is not empty and that every case has the same
    /// number of inputs.
    pub fn new(cases: Vec<TrainingCase>) -> Result<Self, PerceptronError> {
        let dimensions = cases
            .first()
            .ok_or(PerceptronError::EmptyTrainingSet)?
            .input
            .len();
        if dimensions == 0 {
            return Err(PerceptronError::ZeroDimensions);
        }
        if let Some(case) = cases.iter().find(|c| c.input.len() != dimensions) {
            return Err(PerceptronError::MismatchedDimensions {
                expected: dimensions,
                found: case.input.len(),
            });
        }
        Ok(Self { cases, dimensions })
    }

    /// Build the four-row truth table of a two-input logic gate.
    pub fn truth_table(op: fn(bool, bool) -> bool) -> Self {
        let convert = |x| if x { 1.0 } else { 0.0 };
        let cases = [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .map(|(x, y)| TrainingCase::new([convert(x), convert(y)], Activation::from(op(x, y))))
            .collect();
        Self {
            cases,
            dimensions: 2,
        }
    }

    /// The truth table of logical OR: `(0,0)->0, (0,1)->1, (1,0)->1, (1,1)->1`.
    pub fn logical_or() -> Self {
        Self::truth_table(|x, y| x | y)
    }

    /// Get the number of inputs of each case.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Get the number of cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Always false, a training set holds at least one case.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterate over the cases in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TrainingCase> {
        self.cases.iter()
    }
}

impl<'a> IntoIterator for &'a TrainingSet {
    type Item = &'a TrainingCase;
    type IntoIter = std::slice::Iter<'a, TrainingCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

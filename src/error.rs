//! Defines training errors.

use std::{error, fmt};

/// An error type for building a training set or a trainer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PerceptronError {
    /// A training set was built without any case.
    EmptyTrainingSet,
    /// Inputs or weights with zero dimensions were given.
    ZeroDimensions,
    /// A vector does not have the dimensionality of the training set.
    MismatchedDimensions {
        /// The dimensionality of the training set.
        expected: usize,
        /// The length of the offending vector.
        found: usize,
    },
}

impl error::Error for PerceptronError {}

impl fmt::Display for PerceptronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTrainingSet => write!(f, "Training set has no case."),
            Self::ZeroDimensions => write!(f, "Inputs must have at least one dimension."),
            Self::MismatchedDimensions { expected, found } => {
                write!(f, "Expected {} dimensions, found {}.", expected, found)
            }
        }
    }
}

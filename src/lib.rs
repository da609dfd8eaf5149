//! A single binary threshold neuron (perceptron) trained with the perceptron learning rule.

#![deny(unsafe_code, rust_2018_idioms, rust_2021_compatibility)]
#![warn(missing_docs)]

pub mod dataset;
pub mod error;
pub mod logging;
pub mod neuron;
pub mod observer;
pub mod random;
pub mod training;

pub use dataset::{TrainingCase, TrainingSet};
pub use error::PerceptronError;
pub use neuron::{activate, adjust, init_weights, Activation, Outcome, Weights};
pub use observer::{NoopObserver, RecordingObserver, TracingObserver, TrainingObserver};
pub use random::{RandomSource, UniformSource};
pub use training::{
    run_epoch, Epoch, Termination, Trainer, TrainingConfig, TrainingReport, TrainingState,
};

/// The number of inputs of the OR neuron.
pub const INPUT_DIMENSIONS: usize = 2;

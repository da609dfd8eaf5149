//! Observers receiving the events produced while training. Observers only watch the training,
//! nothing they do feeds back into the computation.

use tracing::info;

use crate::neuron::{Activation, Outcome, Weights};

/// Hooks called by the training loop. Every hook does nothing by default.
pub trait TrainingObserver {
    /// Called before the first case of an epoch.
    fn epoch_started(&mut self, _epoch: usize) {}

    /// Called before a case is classified, with the weights used to classify it.
    fn case_started(&mut self, _inputs: &[f64], _weights: &Weights) {}

    /// Called once a case has been classified.
    fn case_finished(&mut self, _activation: Activation, _outcome: Outcome) {}

    /// Called after the last case of an epoch with the epoch's success percentage.
    fn epoch_finished(&mut self, _epoch: usize, _success: f64) {}
}

/// An observer ignoring every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TrainingObserver for NoopObserver {}

/// An observer reporting every event through `tracing` at the info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TrainingObserver for TracingObserver {
    fn epoch_started(&mut self, epoch: usize) {
        info!("##### Epoch #{} #####", epoch);
    }

    fn case_started(&mut self, inputs: &[f64], weights: &Weights) {
        info!("Inputs:  {}", join_floats(inputs, "\t"));
        info!("Weights: {}", join_floats(weights.as_slice(), "\t"));
    }

    fn case_finished(&mut self, activation: Activation, outcome: Outcome) {
        info!("Result:  {} : {}", activation, outcome.is_correct());
    }

    fn epoch_finished(&mut self, epoch: usize, success: f64) {
        info!("##### Epoch #{} : {:.1} #####", epoch, success);
    }
}

/// A single event seen by a [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum TrainingEvent {
    /// See [`TrainingObserver::epoch_started`].
    EpochStarted(usize),
    /// See [`TrainingObserver::case_started`].
    CaseStarted {
        /// The inputs of the case.
        inputs: Vec<f64>,
        /// The weights before the case was classified.
        weights: Weights,
    },
    /// See [`TrainingObserver::case_finished`].
    CaseFinished(Activation, Outcome),
    /// See [`TrainingObserver::epoch_finished`].
    EpochFinished(usize, f64),
}

/// An observer keeping every event in the order it was received.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    /// The recorded events.
    pub events: Vec<TrainingEvent>,
}

impl TrainingObserver for RecordingObserver {
    fn epoch_started(&mut self, epoch: usize) {
        self.events.push(TrainingEvent::EpochStarted(epoch));
    }

    fn case_started(&mut self, inputs: &[f64], weights: &Weights) {
        self.events.push(TrainingEvent::CaseStarted {
            inputs: inputs.to_vec(),
            weights: weights.clone(),
        });
    }

    fn case_finished(&mut self, activation: Activation, outcome: Outcome) {
        self.events.push(TrainingEvent::CaseFinished(activation, outcome));
    }

    fn epoch_finished(&mut self, epoch: usize, success: f64) {
        self.events.push(TrainingEvent::EpochFinished(epoch, success));
    }
}

/// Format the values with one decimal place, separated by the delimiter.
pub fn join_floats(values: &[f64], delimiter: &str) -> String {
    values
        .iter()
        .map(|x| format!("{:.1}", x))
        .collect::<Vec<_>>()
        .join(delimiter)
}

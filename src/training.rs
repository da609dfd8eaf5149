//! The training loop of the neuron. Each epoch passes over the training set once, classifying
//! every case and adjusting the weights right after a misclassification, so a case sees the
//! adjustments made by the cases before it in the same epoch.

use tracing::debug;

use crate::{
    dataset::{TrainingCase, TrainingSet},
    error::PerceptronError,
    neuron::{self, Outcome, Weights},
    observer::TrainingObserver,
};

/// An epoch must score strictly above this percentage for training to stop.
pub const TRAINING_THRESHOLD: f64 = 98.0;

/// Training stops after the epoch with this id, giving at most `MAX_EPOCHS + 1` epochs.
pub const MAX_EPOCHS: usize = 10;

/// Constants driving the training loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingConfig {
    /// The scalar applied to the error when adjusting the weights.
    pub learning_rate: f64,
    /// The success percentage an epoch must exceed to be considered converged.
    pub success_threshold: f64,
    /// The id of the last epoch that may run.
    pub max_epochs: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: neuron::LEARNING_RATE,
            success_threshold: TRAINING_THRESHOLD,
            max_epochs: MAX_EPOCHS,
        }
    }
}

/// The record of a single pass over the training set.
#[derive(Debug, Clone, PartialEq)]
pub struct Epoch {
    /// Sequential id of the epoch, starting at 0.
    pub id: usize,
    /// The outcome of every case, in training set order.
    pub outcomes: Vec<Outcome>,
    /// The percentage of cases classified correctly.
    pub success: f64,
}

/// Compute the percentage of correct outcomes.
pub fn score(outcomes: &[Outcome]) -> f64 {
    let correct: f64 = outcomes.iter().map(|o| o.value()).sum();
    correct / outcomes.len() as f64 * 100.0
}

/// Classify a single case and adjust the weights if it was misclassified.
pub fn run_case<O>(
    case: &TrainingCase,
    weights: Weights,
    learning_rate: f64,
    observer: &mut O,
) -> (Weights, Outcome)
where
    O: TrainingObserver + ?Sized,
{
    observer.case_started(&case.input, &weights);
    let actual = neuron::activate(&case.input, &weights);
    let outcome = Outcome::of(case.expect, actual);
    let weights = match outcome {
        Outcome::Correct => weights,
        Outcome::Incorrect => neuron::adjust_with_rate(weights, case.expect, actual, learning_rate),
    };
    observer.case_finished(actual, outcome);
    (weights, outcome)
}

/// Run one epoch over the training set, returning the updated weights and the epoch record.
pub fn run_epoch<O>(
    id: usize,
    set: &TrainingSet,
    mut weights: Weights,
    learning_rate: f64,
    observer: &mut O,
) -> (Weights, Epoch)
where
    O: TrainingObserver + ?Sized,
{
    observer.epoch_started(id);
    let mut outcomes = Vec::with_capacity(set.len());
    for case in set {
        let (w, outcome) = run_case(case, weights, learning_rate, observer);
        weights = w;
        outcomes.push(outcome);
    }
    let success = score(&outcomes);
    observer.epoch_finished(id, success);
    debug!(epoch = id, success, "epoch finished");
    (
        weights,
        Epoch {
            id,
            outcomes,
            success,
        },
    )
}

/// How training ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// An epoch scored above the success threshold.
    Converged,
    /// The epoch limit was reached without converging.
    LimitReached,
}

/// The state of a [`Trainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingState {
    /// More epochs will run.
    Running,
    /// Training is over.
    Finished(Termination),
}

impl TrainingState {
    /// Check if no more epoch will run.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// The result of a completed training.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// How training ended.
    pub termination: Termination,
    /// The number of epochs that ran.
    pub epochs_run: usize,
    /// The last epoch that ran.
    pub last_epoch: Epoch,
    /// The weights after the last epoch.
    pub weights: Weights,
}

/// Drives epochs until the neuron converges or the epoch limit is reached. The trainer holds the
/// only live copy of the weights.
#[derive(Debug, Clone)]
pub struct Trainer {
    set: TrainingSet,
    weights: Weights,
    config: TrainingConfig,
    state: TrainingState,
    next_epoch: usize,
    last_epoch: Option<Epoch>,
}

impl Trainer {
    /// Create a trainer with the default configuration.
    pub fn new(set: TrainingSet, weights: Weights) -> Result<Self, PerceptronError> {
        Self::with_config(set, weights, TrainingConfig::default())
    }

    /// Create a trainer, checking that the weights match the dimensionality of the set.
    pub fn with_config(
        set: TrainingSet,
        weights: Weights,
        config: TrainingConfig,
    ) -> Result<Self, PerceptronError> {
        if weights.len() != set.dimensions() {
            return Err(PerceptronError::MismatchedDimensions {
                expected: set.dimensions(),
                found: weights.len(),
            });
        }
        Ok(Self {
            set,
            weights,
            config,
            state: TrainingState::Running,
            next_epoch: 0,
            last_epoch: None,
        })
    }

    /// Get the current weights.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Get the current state.
    pub fn state(&self) -> TrainingState {
        self.state
    }

    /// Get the last epoch that ran, if any.
    pub fn last_epoch(&self) -> Option<&Epoch> {
        self.last_epoch.as_ref()
    }

    /// Run a single epoch and decide whether training goes on. Does nothing once training is
    /// over.
    pub fn step<O>(&mut self, observer: &mut O) -> TrainingState
    where
        O: TrainingObserver + ?Sized,
    {
        if self.state.is_terminal() {
            return self.state;
        }
        // Swap the weights out so the epoch can take them by value.
        let weights = std::mem::take(&mut self.weights);
        let (weights, epoch) = run_epoch(
            self.next_epoch,
            &self.set,
            weights,
            self.config.learning_rate,
            observer,
        );
        self.weights = weights;

        self.state = if epoch.success > self.config.success_threshold {
            TrainingState::Finished(Termination::Converged)
        } else if epoch.id >= self.config.max_epochs {
            TrainingState::Finished(Termination::LimitReached)
        } else {
            TrainingState::Running
        };
        debug!(epoch = epoch.id, state = ?self.state, "training state");
        self.next_epoch += 1;
        self.last_epoch = Some(epoch);
        self.state
    }

    /// Run epochs until training is over.
    pub fn train<O>(mut self, observer: &mut O) -> TrainingReport
    where
        O: TrainingObserver + ?Sized,
    {
        loop {
            if let TrainingState::Finished(termination) = self.step(observer) {
                let last_epoch = self
                    .last_epoch
                    .take()
                    .unwrap_or_else(|| unreachable!("a finished trainer ran an epoch"));
                return TrainingReport {
                    termination,
                    epochs_run: self.next_epoch,
                    last_epoch,
                    weights: self.weights,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        neuron::Activation,
        observer::{NoopObserver, RecordingObserver, TrainingEvent},
    };

    #[test]
    fn score_percentage() {
        use Outcome::*;
        assert_eq!(score(&[Correct, Correct, Correct, Incorrect]), 75.0);
        assert_eq!(score(&[Correct; 4]), 100.0);
        assert_eq!(score(&[Incorrect; 4]), 0.0);
    }

    #[test]
    fn epoch_with_one_mistake() {
        // (0,1) sums to 0.5 and fails, the others pass.
        let set = TrainingSet::logical_or();
        let (weights, epoch) = run_epoch(
            0,
            &set,
            Weights::from([1.5, 0.5]),
            neuron::LEARNING_RATE,
            &mut NoopObserver,
        );
        assert_eq!(epoch.success, 75.0);
        assert_eq!(
            epoch.outcomes,
            vec![
                Outcome::Correct,
                Outcome::Incorrect,
                Outcome::Correct,
                Outcome::Correct
            ]
        );
        assert!((weights[0] - 1.7).abs() < 1e-12);
        assert!((weights[1] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn adjustments_are_visible_within_an_epoch() {
        // (0,1) fails with w1 = 0.9 and lifts it to 1.1, so (1,1) sees the new weights.
        let set = TrainingSet::logical_or();
        let mut observer = RecordingObserver::default();
        let (_, epoch) = run_epoch(
            3,
            &set,
            Weights::from([1.5, 0.9]),
            neuron::LEARNING_RATE,
            &mut observer,
        );
        assert_eq!(epoch.id, 3);
        let seen: Vec<_> = observer
            .events
            .iter()
            .filter_map(|e| match e {
                TrainingEvent::CaseStarted { weights, .. } => Some(weights[1]),
                _ => None,
            })
            .collect();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], 0.9);
        assert_eq!(seen[1], 0.9);
        assert!((seen[2] - 1.1).abs() < 1e-12);
        assert!((seen[3] - 1.1).abs() < 1e-12);
    }

    #[test]
    fn correct_case_keeps_weights() {
        let case = TrainingCase::new([1.0, 1.0], Activation::High);
        let weights = Weights::from([0.6, 0.6]);
        let (after, outcome) =
            run_case(&case, weights.clone(), neuron::LEARNING_RATE, &mut NoopObserver);
        assert_eq!(outcome, Outcome::Correct);
        assert_eq!(after, weights);
    }

    #[test]
    fn converges_on_first_epoch() {
        let trainer = Trainer::new(TrainingSet::logical_or(), Weights::from([1.5, 1.5])).unwrap();
        let report = trainer.train(&mut NoopObserver);
        assert_eq!(report.termination, Termination::Converged);
        assert_eq!(report.epochs_run, 1);
        assert_eq!(report.last_epoch.id, 0);
        assert_eq!(report.last_epoch.success, 100.0);
        assert_eq!(report.weights, Weights::from([1.5, 1.5]));
    }

    #[test]
    fn stops_at_epoch_limit() {
        let config = TrainingConfig {
            success_threshold: 100.0,
            ..TrainingConfig::default()
        };
        let trainer =
            Trainer::with_config(TrainingSet::logical_or(), Weights::from([1.5, 1.5]), config)
                .unwrap();
        let report = trainer.train(&mut NoopObserver);
        assert_eq!(report.termination, Termination::LimitReached);
        assert_eq!(report.last_epoch.id, MAX_EPOCHS);
        assert_eq!(report.epochs_run, MAX_EPOCHS + 1);
    }

    #[test]
    fn step_after_termination_is_a_no_op() {
        let mut trainer =
            Trainer::new(TrainingSet::logical_or(), Weights::from([1.5, 1.5])).unwrap();
        assert_eq!(trainer.state(), TrainingState::Running);
        assert!(trainer.last_epoch().is_none());

        let mut observer = RecordingObserver::default();
        let state = trainer.step(&mut observer);
        assert_eq!(state, TrainingState::Finished(Termination::Converged));
        let events = observer.events.len();

        assert_eq!(trainer.step(&mut observer), state);
        assert_eq!(observer.events.len(), events);
        assert_eq!(trainer.last_epoch().map(|e| e.id), Some(0));
    }

    #[test]
    fn rejects_mismatched_weights() {
        let err = Trainer::new(TrainingSet::logical_or(), Weights::from([1.0, 1.0, 1.0]))
            .unwrap_err();
        assert_eq!(
            err,
            PerceptronError::MismatchedDimensions {
                expected: 2,
                found: 3
            }
        );
    }
}

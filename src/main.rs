use std::error::Error;

use perceptron::{
    init_weights, logging, Termination, TracingObserver, Trainer, TrainingSet, UniformSource,
    INPUT_DIMENSIONS,
};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    logging::install_logger()?;

    let mut source = UniformSource::from_entropy();
    let weights = init_weights(INPUT_DIMENSIONS, &mut source);
    let trainer = Trainer::new(TrainingSet::logical_or(), weights)?;

    let report = trainer.train(&mut TracingObserver);
    match report.termination {
        Termination::Converged => info!(
            "converged after {} epochs with {:.1}% success",
            report.epochs_run, report.last_epoch.success
        ),
        Termination::LimitReached => info!(
            "stopped after {} epochs with {:.1}% success",
            report.epochs_run, report.last_epoch.success
        ),
    }
    info!("weights: {:?}", report.weights.as_slice());
    Ok(())
}

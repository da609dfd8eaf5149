use std::error::Error;

use perceptron::{init_weights, logging, NoopObserver, Trainer, TrainingSet, UniformSource};

/// XOR is not linearly separable, a single neuron always runs out of epochs on it.
fn main() -> Result<(), Box<dyn Error>> {
    logging::install_logger()?;

    let mut source = UniformSource::from_entropy();
    let dataset = TrainingSet::truth_table(|x, y| x ^ y);
    let weights = init_weights(dataset.dimensions(), &mut source);
    let report = Trainer::new(dataset.clone(), weights)?.train(&mut NoopObserver);

    println!(
        "{:?} after {} epochs, best {:.1}%",
        report.termination, report.epochs_run, report.last_epoch.success
    );
    for case in &dataset {
        println!("input: {:?}", case.input);
        println!("pred: {}", perceptron::activate(&case.input, &report.weights));
        println!("real: {}", case.expect);
        println!("================")
    }
    Ok(())
}

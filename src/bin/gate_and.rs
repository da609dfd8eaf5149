use std::error::Error;

use perceptron::{init_weights, logging, NoopObserver, Trainer, TrainingSet, UniformSource};

fn main() -> Result<(), Box<dyn Error>> {
    logging::install_logger()?;

    let mut source = UniformSource::from_entropy();
    let dataset = TrainingSet::truth_table(|x, y| x & y);
    let weights = init_weights(dataset.dimensions(), &mut source);
    let report = Trainer::new(dataset.clone(), weights)?.train(&mut NoopObserver);

    println!("{:?} after {} epochs", report.termination, report.epochs_run);
    for case in &dataset {
        println!("input: {:?}", case.input);
        println!("pred: {}", perceptron::activate(&case.input, &report.weights));
        println!("real: {}", case.expect);
        println!("================")
    }
    Ok(())
}

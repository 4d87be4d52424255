use anyhow::Context;
use lifeboat::{load_cached, ArtifactStore, PassengerForm, Predictor};
use log::{error, info};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    info!("=== Starting Titanic Survival Predictor ===");

    let store = ArtifactStore::new_default();
    let artifacts = load_cached(&store).context("failed to load model artifacts")?;
    let predictor = Predictor::builder()
        .with_artifacts(artifacts)?
        .build()
        .context("failed to build predictor")?;

    let predictor_info = predictor.info();
    info!(
        "Predictor ready: {} model over features {:?}",
        predictor_info.model_kind, predictor_info.feature_names
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    writeln!(output, "Titanic Survival Prediction")?;
    writeln!(output, "===========================")?;

    let form = PassengerForm::new();
    loop {
        writeln!(output)?;
        writeln!(output, "Passenger inputs (blank keeps the default, 'q' quits)")?;

        let record = match form.collect(&mut input, &mut output)? {
            Some(record) => record,
            None => break,
        };

        if !confirm_trigger(&mut input, &mut output)? {
            break;
        }

        match predictor.predict(&record) {
            Ok(prediction) => {
                writeln!(output)?;
                writeln!(output, "Result")?;
                writeln!(output, "Survival probability: {:.3}", prediction.probability)?;
                writeln!(
                    output,
                    "Predicted class (0 = did not survive, 1 = survived): {}",
                    prediction.label
                )?;
            }
            Err(e) => {
                error!("Prediction failed: {}", e);
                writeln!(output)?;
                writeln!(output, "Prediction failed, please try again.")?;
            }
        }
    }

    info!("=== Demo complete ===");
    Ok(())
}

/// Reads the trigger action: Enter predicts, anything else quits.
fn confirm_trigger<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "\nPress Enter to predict ('q' quits): ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().is_empty())
}

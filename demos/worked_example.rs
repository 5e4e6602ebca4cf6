// Demonstration: targets for a ten-step rollout spanning two episodes.
//
// Build/run from this repo root:
//   cargo run --example worked_example -- --next-value 10 --gamma 1.0

use std::env;

use rollout_targets::{Estimator, EstimatorConfig, Rollout};

fn main() {
    let args: Vec<String> = env::args().collect();
    let next_value: f64 = arg_value(&args, "--next-value")
        .and_then(|s| s.parse().ok())
        .unwrap_or(1.0);
    let gamma: f64 = arg_value(&args, "--gamma")
        .and_then(|s| s.parse().ok())
        .unwrap_or(1.0);
    let gae_lambda: f64 = arg_value(&args, "--lambda")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.95);

    let config = EstimatorConfig {
        gamma,
        gae_lambda,
        ..EstimatorConfig::default()
    };
    let estimator = match Estimator::new(config) {
        Ok(est) => est,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    // The first episode ends at step 5; the second is still running.
    let rewards = vec![1.0; 10];
    let masks = vec![1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0];
    let values = vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.5, 4.0, 3.0, 2.0, 1.0];

    let result = Rollout::with_values(rewards, masks, values).and_then(|rollout| {
        let returns = estimator.returns(&rollout, next_value)?;
        let gae = estimator.advantages(&rollout, next_value)?;
        Ok((returns, gae))
    });

    match result {
        Ok((returns, gae)) => {
            println!("step  return  advantage  value-target");
            let rows = returns
                .iter()
                .zip(gae.advantages.iter().zip(gae.returns.iter()))
                .enumerate();
            for (t, (ret, (adv, target))) in rows {
                println!("{:>4}  {:>6.2}  {:>9.3}  {:>12.3}", t, ret, adv, target);
            }
        }
        Err(e) => {
            eprintln!("Estimation failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

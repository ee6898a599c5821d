//! Basic Correction Example
//!
//! Feeds a particulate series with one electrical spike through the
//! correction pipeline and prints each stage.
//!
//! ## What You'll Learn
//!
//! - Creating a corrector and adjusting its windows
//! - Reading the median and the corrected value of each step
//! - Handling configuration and channel errors
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_correction
//! ```

use airguard_core::{Channel, CorrectionError, DataCorrector};

fn main() -> Result<(), CorrectionError> {
    println!("AirGuard Basic Correction Example");
    println!("=================================\n");

    let mut corrector = DataCorrector::new();
    corrector.set_median_window(3)?;
    corrector.set_average_window(3)?;

    println!("Median window: {}", corrector.config().median_window());
    println!("Average window: {}\n", corrector.config().average_window());

    let readings = [10.0, 12.0, 11.0, 50.0, 13.0, 12.0];
    println!("{:>8} {:>8} {:>10}", "raw", "median", "corrected");
    for raw in readings {
        let step = corrector.correct_detailed(Channel::Pm, raw)?;
        println!(
            "{:>8.2} {:>8.2} {:>10.2} {}",
            step.raw, step.median, step.corrected, Channel::Pm.unit()
        );
    }

    println!("\nRejected configuration:");
    if let Err(e) = corrector.set_median_window(0) {
        println!("  {}", e);
    }

    println!("\nUnknown channel:");
    if let Err(e) = corrector.correct_by_id(9, 1.0) {
        println!("  {}", e);
    }

    corrector.shutdown();
    Ok(())
}

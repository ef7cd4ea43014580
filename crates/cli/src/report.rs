//! Search results in display units.

use serde::Serialize;
use u_bundle_core::{Role, SearchOutcome};

/// One circle of the reported bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleRow {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub role: Role,
}

/// Search summary, converted back from scaled to input units.
#[derive(Debug, Clone, Serialize)]
pub struct BundleReport {
    /// Radii as read from the input.
    pub radii: Vec<f64>,
    /// Scale applied before the search.
    pub scale: f64,
    /// Bundle diameter in input units, `None` if no bundle was found.
    pub bundle_diameter: Option<f64>,
    /// Cables then the bundle circle, centered on the bundle.
    pub circles: Vec<CircleRow>,
    pub permutations_evaluated: usize,
    pub feasible_count: usize,
    pub computation_time_ms: u64,
}

impl BundleReport {
    /// Builds a report from an outcome computed on radii multiplied by `scale`.
    pub fn new(radii: Vec<f64>, scale: f64, outcome: &SearchOutcome) -> Self {
        let best = outcome
            .best
            .as_ref()
            .map(|placement| placement.centered().scaled(1.0 / scale));

        let circles = best
            .as_ref()
            .map(|placement| {
                placement
                    .to_tuples()
                    .into_iter()
                    .map(|(x, y, radius, role)| CircleRow { x, y, radius, role })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            radii,
            scale,
            bundle_diameter: best.as_ref().map(|p| p.diameter()),
            circles,
            permutations_evaluated: outcome.permutations_evaluated,
            feasible_count: outcome.feasible_count,
            computation_time_ms: outcome.computation_time_ms,
        }
    }

    /// Prints a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("Cables: {:?}", self.radii);
        println!(
            "Permutations: {} evaluated, {} feasible ({} ms)",
            self.permutations_evaluated, self.feasible_count, self.computation_time_ms
        );

        match self.bundle_diameter {
            Some(diameter) => {
                println!("Bundle diameter: {:.4}", diameter);
                println!();
                println!("{:>10} {:>10} {:>10}  role", "x", "y", "radius");
                for row in &self.circles {
                    println!(
                        "{:>10.4} {:>10.4} {:>10.4}  {:?}",
                        row.x, row.y, row.radius, row.role
                    );
                }
            }
            None => println!("No valid bundle found for any ordering."),
        }
    }
}

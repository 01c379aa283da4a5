//! Implementation of the `patternlab sort` command.

use patternlab_core::{
    application::SortService,
    domain::{SortAlgorithm, SortStats},
};
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::{OutputFormat, SortArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct SortReport {
    algorithm: SortAlgorithm,
    stable: bool,
    values: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<SortStats>,
}

pub fn execute(args: SortArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let algorithm = args
        .algorithm
        .map(SortAlgorithm::from)
        .unwrap_or(config.sorting.algorithm);
    debug!(%algorithm, from_flag = args.algorithm.is_some(), "Algorithm chosen");

    let report = sort_values(algorithm, args.values, args.stats)?;
    render(&report, output)
}

fn sort_values(algorithm: SortAlgorithm, mut values: Vec<i64>, stats: bool) -> CliResult<SortReport> {
    let service = SortService::with_algorithm(algorithm);
    let stats = if stats {
        Some(service.sort_instrumented(&mut values)?)
    } else {
        service.sort(&mut values)?;
        None
    };

    Ok(SortReport {
        algorithm,
        stable: algorithm.is_stable(),
        values,
        stats,
    })
}

fn render(report: &SortReport, output: &OutputManager) -> CliResult<()> {
    let joined = report
        .values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    match output.format() {
        OutputFormat::Json => output.json(report)?,
        OutputFormat::Plain => {
            output.print(&joined)?;
            if let Some(stats) = &report.stats {
                output.print(&format!(
                    "comparisons={} swaps={} passes={}",
                    stats.comparisons, stats.swaps, stats.passes
                ))?;
            }
        }
        OutputFormat::Human | OutputFormat::Auto => {
            output.success(&format!("Sorted with {} sort", report.algorithm))?;
            output.print(&format!("  {joined}"))?;
            if let Some(stats) = &report.stats {
                output.header("Work done:")?;
                output.print(&format!("  comparisons  {}", stats.comparisons))?;
                output.print(&format!("  swaps        {}", stats.swaps))?;
                output.print(&format!("  passes       {}", stats.passes))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_every_algorithm() {
        for algorithm in SortAlgorithm::ALL {
            let report = sort_values(algorithm, vec![5, -2, 9, 0, 5], false).unwrap();
            assert_eq!(report.values, vec![-2, 0, 5, 5, 9]);
            assert!(report.stats.is_none());
        }
    }

    #[test]
    fn bubble_on_sorted_input_makes_one_pass() {
        let report = sort_values(SortAlgorithm::Bubble, vec![1, 2, 3, 4], true).unwrap();
        let stats = report.stats.unwrap();
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn report_serialises_algorithm_key() {
        let report = sort_values(SortAlgorithm::Merge, vec![2, 1], false).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["algorithm"], "merge");
        assert_eq!(json["stable"], true);
        assert!(json.get("stats").is_none());
    }
}

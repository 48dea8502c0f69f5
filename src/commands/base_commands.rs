use chrono::Local;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::services::forecast::{DEFAULT_RELEVANT_WINDOW, DEFAULT_TRIALS};

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast team throughput until the next release and for the next full release period
    Forecast {
        /// Throughput CSV file (team, date_day, throughput)
        #[arg(short = 'f', long)]
        throughput: String,
        /// Release cadence CSV file (cadence, release_date)
        #[arg(short, long)]
        release_cadences: String,
        /// Team cadence YAML file
        #[arg(short, long)]
        teams: String,
        /// Output CSV file
        #[arg(short, long)]
        output: String,
        /// Number of most recent days used as the sampling population
        #[arg(short = 'w', long, default_value_t = DEFAULT_RELEVANT_WINDOW)]
        relevant_window: usize,
        /// Number of simulation runs per horizon
        #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
        trials: usize,
        /// Reference date for days until release (YYYY-MM-DD)
        #[arg(short = 'd', long, default_value_t = default_today())]
        today: String,
        /// Seed for reproducible simulations
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Plot the daily throughput of one team from CSV into a PNG chart
    PlotThroughput {
        /// Throughput CSV file
        #[arg(short, long)]
        input: String,
        /// Team to plot
        #[arg(long)]
        team: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Derive cycle time, lead time, work item age, stage age and staleness per issue
    FlowMetrics {
        /// Issue timeline CSV file (Issue_Key, Current_Status and one date column per status)
        #[arg(short, long)]
        input: String,
        /// Output CSV file
        #[arg(short, long)]
        output: String,
        /// Reference time for ages and staleness (YYYY-MM-DDTHH:MM)
        #[arg(short = 'a', long, default_value_t = default_now())]
        as_of: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn default_now() -> String {
    Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_uses_default_settings() {
        let args = CliArgs::parse_from([
            "throughput-forecasts",
            "forecast",
            "-f",
            "throughput.csv",
            "-r",
            "release_cadences.csv",
            "-t",
            "teams.yaml",
            "-o",
            "forecast.csv",
        ]);

        if let Commands::Forecast {
            relevant_window,
            trials,
            today,
            seed,
            ..
        } = args.command
        {
            assert_eq!(relevant_window, 60);
            assert_eq!(trials, 1000);
            assert_eq!(today, default_today());
            assert_eq!(seed, None);
        } else {
            panic!("expected forecast command");
        }
    }

    #[test]
    fn forecast_accepts_overrides() {
        let args = CliArgs::parse_from([
            "throughput-forecasts",
            "forecast",
            "-f",
            "throughput.csv",
            "-r",
            "release_cadences.csv",
            "-t",
            "teams.yaml",
            "-o",
            "forecast.csv",
            "-w",
            "30",
            "-n",
            "500",
            "-d",
            "2026-02-02",
            "--seed",
            "7",
        ]);

        if let Commands::Forecast {
            relevant_window,
            trials,
            today,
            seed,
            ..
        } = args.command
        {
            assert_eq!(relevant_window, 30);
            assert_eq!(trials, 500);
            assert_eq!(today, "2026-02-02");
            assert_eq!(seed, Some(7));
        } else {
            panic!("expected forecast command");
        }
    }

    #[test]
    fn flow_metrics_accepts_reference_time() {
        let args = CliArgs::parse_from([
            "throughput-forecasts",
            "flow-metrics",
            "-i",
            "timeline.csv",
            "-o",
            "metrics.csv",
            "--as-of",
            "2026-02-02T12:00",
        ]);

        if let Commands::FlowMetrics {
            input,
            output,
            as_of,
        } = args.command
        {
            assert_eq!(input, "timeline.csv");
            assert_eq!(output, "metrics.csv");
            assert_eq!(as_of, "2026-02-02T12:00");
        } else {
            panic!("expected flow-metrics command");
        }
    }
}

mod commands;
mod domain;
mod services;
mod telemetry;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::flow_metrics_cmd::flow_metrics_command;
use crate::commands::forecast_cmd::forecast_command;
use crate::commands::plot_throughput_cmd::plot_throughput_command;
use clap::{CommandFactory, Parser};

fn main() -> ExitCode {
    telemetry::init_tracing();
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Forecast { .. } => forecast_command(cmd),
        cmd @ Commands::PlotThroughput { .. } => plot_throughput_command(cmd),
        cmd @ Commands::FlowMetrics { .. } => flow_metrics_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let bin_name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, bin_name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}

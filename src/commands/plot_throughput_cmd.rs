use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::throughput_plot::plot_team_throughput_from_csv_file;

pub fn plot_throughput_command(cmd: Commands) -> ExitCode {
    if let Commands::PlotThroughput {
        input,
        team,
        output,
    } = cmd
    {
        match plot_team_throughput_from_csv_file(&input, &team, &output) {
            Ok(()) => println!("Throughput plot for {team} written to {output}"),
            Err(e) => {
                eprintln!("Failed to plot throughput: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

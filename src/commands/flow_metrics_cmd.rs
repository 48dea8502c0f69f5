use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::csv_table::parse_timestamp;
use crate::services::flow_metrics::compute_flow_metrics;
use crate::services::flow_metrics_csv::write_flow_metrics_csv_file;
use crate::services::timeline_csv::load_timeline_from_csv_file;

pub fn flow_metrics_command(cmd: Commands) -> ExitCode {
    if let Commands::FlowMetrics {
        input,
        output,
        as_of,
    } = cmd
    {
        let Some(now) = parse_timestamp(&as_of) else {
            eprintln!("Invalid reference time: {as_of} (expected YYYY-MM-DDTHH:MM)");
            return ExitCode::FAILURE;
        };

        let timeline = match load_timeline_from_csv_file(&input) {
            Ok(timeline) => timeline,
            Err(e) => {
                eprintln!("Failed to load issue timeline: {e}");
                return ExitCode::FAILURE;
            }
        };

        let metrics = compute_flow_metrics(&timeline, now);
        if let Err(e) = write_flow_metrics_csv_file(&output, &metrics) {
            eprintln!("Failed to write flow metrics: {e}");
            return ExitCode::FAILURE;
        }
        println!("Flow metrics for {} issues written to {output}", metrics.len());
    }
    ExitCode::SUCCESS
}

pub mod base_commands;
pub mod flow_metrics_cmd;
pub mod forecast_cmd;
pub mod plot_throughput_cmd;
pub mod report_format;

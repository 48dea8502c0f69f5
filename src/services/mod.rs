pub mod cadence_resolver;
pub mod csv_table;
pub mod flow_metrics;
pub mod flow_metrics_csv;
pub mod forecast;
pub mod forecast_csv;
pub mod percentiles;
pub mod release_cadence_csv;
pub mod team_config_yaml;
pub mod throughput_csv;
pub mod throughput_plot;
pub mod throughput_sampler;
pub mod timeline_csv;

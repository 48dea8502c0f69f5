use std::process::ExitCode;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_forecast_report;
use crate::services::forecast::{ForecastSettings, forecast_teams, forecast_teams_with_rng};
use crate::services::forecast_csv::write_forecast_csv_file;
use crate::services::release_cadence_csv::load_release_schedule_from_csv_file;
use crate::services::team_config_yaml::load_team_config_from_yaml_file;
use crate::services::throughput_csv::load_throughput_from_csv_file;

pub fn forecast_command(cmd: Commands) -> ExitCode {
    if let Commands::Forecast {
        throughput,
        release_cadences,
        teams,
        output,
        relevant_window,
        trials,
        today,
        seed,
    } = cmd
    {
        let reference_date = match NaiveDate::parse_from_str(&today, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                eprintln!("Invalid reference date: {today} (expected YYYY-MM-DD)");
                return ExitCode::FAILURE;
            }
        };

        let throughput_records = match load_throughput_from_csv_file(&throughput) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("Failed to load throughput data: {e}");
                return ExitCode::FAILURE;
            }
        };
        let schedule = match load_release_schedule_from_csv_file(&release_cadences) {
            Ok(schedule) => schedule,
            Err(e) => {
                eprintln!("Failed to load release cadences: {e}");
                return ExitCode::FAILURE;
            }
        };
        let team_config = match load_team_config_from_yaml_file(&teams) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load team config: {e}");
                return ExitCode::FAILURE;
            }
        };

        let settings = ForecastSettings {
            relevant_window,
            trials,
        };
        let forecast = match seed {
            Some(seed) => forecast_teams_with_rng(
                &throughput_records,
                &schedule,
                &team_config,
                settings,
                reference_date,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => forecast_teams(
                &throughput_records,
                &schedule,
                &team_config,
                settings,
                reference_date,
            ),
        };
        let results = match forecast {
            Ok(results) => results,
            Err(e) => {
                eprintln!("Failed to forecast throughput: {e}");
                return ExitCode::FAILURE;
            }
        };

        if let Err(e) = write_forecast_csv_file(&output, &results) {
            eprintln!("Failed to write forecast output: {e}");
            return ExitCode::FAILURE;
        }
        println!("{}", format_forecast_report(&today, trials, &results));
        println!("Forecast for {} teams written to {output}", results.len());
    }
    ExitCode::SUCCESS
}

use crate::domain::throughput::{ThroughputRecord, team_series};
use crate::services::throughput_csv::{ThroughputCsvError, load_throughput_from_csv_file};
use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThroughputPlotError {
    #[error("failed to load throughput csv: {0}")]
    LoadThroughput(#[from] ThroughputCsvError),
    #[error("no throughput data for team {0}")]
    EmptyThroughput(String),
    #[error("failed to render throughput plot: {0}")]
    Plot(String),
}

pub fn plot_team_throughput_from_csv_file(
    input_path: &str,
    team: &str,
    output_path: &str,
) -> Result<(), ThroughputPlotError> {
    let records = load_throughput_from_csv_file(input_path)?;
    let series = team_series(&records, team);
    if series.is_empty() {
        return Err(ThroughputPlotError::EmptyThroughput(team.to_string()));
    }
    render_plot_png(output_path, team, &series)
}

fn render_plot_png(
    output_path: &str,
    team: &str,
    series: &[ThroughputRecord],
) -> Result<(), ThroughputPlotError> {
    let max_completed = series
        .iter()
        .map(|record| record.throughput)
        .max()
        .unwrap_or(0);
    let max_y = bar_height(max_completed).saturating_add(1);
    let max_x = series.len().max(1) as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ThroughputPlotError::Plot(e.to_string()))?;

    let caption = format!("Daily Throughput: {team}");
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0..max_y)
        .map_err(|e| ThroughputPlotError::Plot(e.to_string()))?;

    let label_count = series.len().clamp(1, 10);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Date")
        .y_desc("Completed items")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(label_count)
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            series
                .get(*index as usize)
                .map(|record| record.date.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| ThroughputPlotError::Plot(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled().stroke_width(1);
    chart
        .draw_series(series.iter().enumerate().map(|(idx, record)| {
            Rectangle::new(
                [(idx as i32, 0), (idx as i32 + 1, bar_height(record.throughput))],
                bar_style.clone(),
            )
        }))
        .map_err(|e| ThroughputPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| ThroughputPlotError::Plot(e.to_string()))?;
    Ok(())
}

fn bar_height(throughput: u32) -> i32 {
    i32::try_from(throughput).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn rejects_team_without_throughput() {
        let input_file = assert_fs::NamedTempFile::new("throughput.csv").unwrap();
        input_file
            .write_str("team,date_day,throughput\nMobile,2026-01-26,2\n")
            .unwrap();
        let output_file = assert_fs::NamedTempFile::new("throughput.png").unwrap();

        let error = plot_team_throughput_from_csv_file(
            input_file.path().to_str().unwrap(),
            "Order Create",
            output_file.path().to_str().unwrap(),
        )
        .expect_err("expected empty throughput error");

        assert!(matches!(error, ThroughputPlotError::EmptyThroughput(team) if team == "Order Create"));
        output_file.assert(predicate::path::missing());
    }

    #[test]
    fn reports_missing_columns_of_the_input() {
        let input_file = assert_fs::NamedTempFile::new("throughput.csv").unwrap();
        input_file.write_str("team,throughput\nMobile,2\n").unwrap();

        let error = plot_team_throughput_from_csv_file(
            input_file.path().to_str().unwrap(),
            "Mobile",
            "unused.png",
        )
        .expect_err("expected missing column error");

        assert!(matches!(
            error,
            ThroughputPlotError::LoadThroughput(ThroughputCsvError::MissingColumn("date_day"))
        ));
    }

    #[test]
    fn bar_height_saturates_instead_of_wrapping() {
        assert_eq!(bar_height(7), 7);
        assert_eq!(bar_height(u32::MAX), i32::MAX);
    }
}

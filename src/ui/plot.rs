use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::VacancySeries;
use crate::state::ChartState;

pub const CHART_TITLE: &str = "Job Vacancies Over Time";

// ---------------------------------------------------------------------------
// Month axis
// ---------------------------------------------------------------------------

/// Months since year 0, so consecutive periods are one unit apart.
pub fn month_index(date: NaiveDate) -> f64 {
    f64::from(date.year() * 12 + date.month0() as i32)
}

/// `YYYY-MM` label for a whole-month axis position, `None` between months.
pub fn month_label(x: f64) -> Option<String> {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 {
        return None;
    }
    let index = rounded as i32;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) + 1;
    Some(format!("{year:04}-{month:02}"))
}

/// Plot coordinates in file order.
pub fn series_points(series: &VacancySeries) -> Vec<[f64; 2]> {
    series
        .points
        .iter()
        .map(|p| [month_index(p.date), p.value])
        .collect()
}

// ---------------------------------------------------------------------------
// Vacancy chart (central panel)
// ---------------------------------------------------------------------------

/// Render the vacancy line chart in the central panel.
pub fn vacancy_plot(ui: &mut Ui, state: &ChartState) {
    let series = match &state.series {
        Some(s) => s,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a plotting file to chart it  (File → Open…)");
            });
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(CHART_TITLE);
    });

    let coords = series_points(series);
    let color = Color32::from_rgb(31, 119, 180);

    Plot::new("vacancy_plot")
        .x_axis_label("Date")
        .y_axis_label("Number of Job Vacancies")
        // Tick labels cannot be rotated; label whole months only.
        .x_axis_formatter(|mark, _range| month_label(mark.value).unwrap_or_default())
        .label_formatter(|_name, point| match month_label(point.x.round()) {
            Some(month) => format!("{month}\n{:.0}", point.y),
            None => format!("{:.0}", point.y),
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(coords.clone()))
                .name("Value")
                .color(color)
                .width(1.5);
            let markers = Points::new(PlotPoints::from(coords))
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(4.0)
                .color(color);

            plot_ui.line(line);
            plot_ui.points(markers);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::VacancyPoint;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn month_index_round_trips_to_label() {
        for (y, m) in [(2015, 1), (2019, 12), (2023, 4)] {
            let label = month_label(month_index(date(y, m))).unwrap();
            assert_eq!(label, format!("{y:04}-{m:02}"));
        }
    }

    #[test]
    fn consecutive_months_are_one_apart() {
        assert_eq!(month_index(date(2024, 1)) - month_index(date(2023, 12)), 1.0);
    }

    #[test]
    fn fractional_positions_have_no_label() {
        assert_eq!(month_label(24_276.5), None);
    }

    #[test]
    fn points_follow_file_order() {
        let series = VacancySeries {
            points: vec![
                VacancyPoint { date: date(2023, 4), value: 2.0 },
                VacancyPoint { date: date(2023, 1), value: 1.0 },
            ],
        };
        let coords = series_points(&series);
        assert!(coords[0][0] > coords[1][0]);
        assert_eq!(coords[1][1], 1.0);
    }
}

//! Mock telemetry for the dashboard's chart panel. The series are fixed for
//! the whole session; there's no live feed behind them.

pub struct Series {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

pub struct TelemetryChart {
    pub title: &'static str,
    pub x_labels: Vec<&'static str>,
    pub series: Vec<Series>,
}

impl TelemetryChart {
    /// Shared vertical scale across all series of one chart.
    pub fn value_range(&self) -> (f64, f64) {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for series in &self.series {
            for x in &series.values {
                min = min.min(*x);
                max = max.max(*x);
            }
        }
        (min, max)
    }
}

pub fn speed_chart() -> TelemetryChart {
    TelemetryChart {
        title: "Ship speed over time",
        x_labels: vec![
            "08:00", "08:05", "08:10", "08:15", "08:20", "08:25", "08:30", "08:35", "08:40",
            "08:45",
        ],
        series: vec![Series {
            label: "Speed (knots)",
            color: "#39d353",
            values: vec![0.0, 2.5, 3.8, 4.2, 3.9, 3.5, 3.2, 2.8, 2.1, 0.0],
        }],
    }
}

pub fn position_chart() -> TelemetryChart {
    TelemetryChart {
        title: "Position trajectory",
        x_labels: vec![
            "Fix 1", "Fix 2", "Fix 3", "Fix 4", "Fix 5", "Fix 6", "Fix 7", "Fix 8", "Fix 9",
            "Fix 10",
        ],
        series: vec![
            Series {
                label: "Latitude (deg N)",
                color: "#64b5f6",
                values: vec![
                    5.5481, 5.5482, 5.5483, 5.5484, 5.5485, 5.5486, 5.5487, 5.5488, 5.5489,
                    5.5490,
                ],
            },
            Series {
                label: "Longitude (deg E)",
                color: "#ffb74d",
                values: vec![
                    95.3237, 95.3238, 95.3239, 95.3240, 95.3241, 95.3242, 95.3243, 95.3244,
                    95.3245, 95.3246,
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_series_has_ten_points() {
        for chart in [speed_chart(), position_chart()] {
            assert_eq!(chart.x_labels.len(), 10);
            for series in &chart.series {
                assert_eq!(series.values.len(), 10);
            }
        }
    }

    #[test]
    fn value_range_spans_all_series() {
        let chart = position_chart();
        let (min, max) = chart.value_range();
        assert_eq!(min, 5.5481);
        assert_eq!(max, 95.3246);
    }
}

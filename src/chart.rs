use serde::Serialize;

/// Height given to every bar when all samples are equal.
pub const FLAT_HEIGHT: f64 = 0.6;
/// Smallest height any bar is drawn at, so minimum samples stay visible.
pub const MIN_HEIGHT: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub floor: f64,
    pub flat: f64,
}

impl Default for ChartScale {
    fn default() -> Self {
        Self {
            floor: MIN_HEIGHT,
            flat: FLAT_HEIGHT,
        }
    }
}

impl ChartScale {
    /// Maps samples onto bar heights as fractions of the container.
    ///
    /// The largest sample reaches 1.0 and the smallest sits at `floor`. An
    /// empty series yields no bars.
    pub fn normalize(&self, samples: &[f64]) -> Vec<f64> {
        if samples.is_empty() {
            return Vec::new();
        }

        let values: Vec<f64> = samples
            .iter()
            .map(|value| if value.is_finite() { *value } else { 0.0 })
            .collect();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max == min {
            return vec![self.flat; values.len()];
        }

        values
            .iter()
            .map(|value| position(*value, min, max).clamp(self.floor, 1.0))
            .collect()
    }
}

/// Where `value` sits between `min` and `max`, as a fraction.
fn position(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range.is_finite() {
        (value - min) / range
    } else {
        // the span overflows f64, so scale everything down first
        (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    }
}

pub fn normalize(samples: &[f64]) -> Vec<f64> {
    ChartScale::default().normalize(samples)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub height_pct: f64,
    /// False for a gap where nothing was recorded.
    pub logged: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn new(labels: Vec<String>, values: &[f64]) -> Self {
        let values: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        Self::with_gaps(labels, &values)
    }

    /// Builds a chart where `None` slots are drawn as empty gaps. Only the
    /// recorded values take part in scaling.
    pub fn with_gaps(labels: Vec<String>, values: &[Option<f64>]) -> Self {
        let samples: Vec<f64> = values.iter().flatten().copied().collect();
        let mut heights = normalize(&samples).into_iter();
        let bars = labels
            .into_iter()
            .zip(values)
            .map(|(label, value)| match value {
                Some(value) => Bar {
                    label,
                    value: *value,
                    height_pct: percent(heights.next().unwrap_or(0.0)),
                    logged: true,
                },
                None => Bar {
                    label,
                    value: 0.0,
                    height_pct: 0.0,
                    logged: false,
                },
            })
            .collect();
        Self { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

fn percent(height: f64) -> f64 {
    (height * 1000.0).round() / 10.0
}

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a data domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// value axis turns "larger is higher" into SVG's downward-growing y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// A zero-span domain is accepted and maps everything onto `range.0`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        if self.is_degenerate() {
            return Ok(self.range_start);
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        if self.range_start == self.range_end {
            return Ok(self.domain_start);
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Spacing between ticks for roughly `tick_count` ticks.
    ///
    /// Steps are powers of ten times 1, 2 or 5. `None` when no step exists:
    /// zero requested ticks or a zero-span domain. Counts above
    /// `MAX_TICK_COUNT` are treated as `MAX_TICK_COUNT`.
    #[must_use]
    pub fn tick_step(self, tick_count: usize) -> Option<f64> {
        nice_step(self.domain_end - self.domain_start, tick_count)
    }

    /// Round-valued ticks covering the domain, in ascending order.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        if tick_count == 0 {
            return Vec::new();
        }
        let (low, high) = ordered(self.domain_start, self.domain_end);
        let Some(step) = self.tick_step(tick_count) else {
            return vec![low];
        };

        let scale = 10f64.powi(step_precision(step) as i32);
        let first = (low / step).ceil();
        let stop = (high / step).floor() * step + step * 0.5;
        let mut ticks = Vec::new();
        let mut index = 0.0;
        loop {
            let value = ((first + index) * step * scale).round() / scale;
            if value >= stop {
                break;
            }
            ticks.push(value);
            index += 1.0;
        }
        ticks
    }
}

/// Largest tick count honoured by the scales; larger requests are clamped.
pub const MAX_TICK_COUNT: usize = 1_000;

pub(crate) fn nice_step(span: f64, tick_count: usize) -> Option<f64> {
    let span = span.abs();
    if tick_count == 0 || !span.is_finite() || span == 0.0 {
        return None;
    }

    let count = tick_count.min(MAX_TICK_COUNT) as f64;
    let mut step = 10f64.powf((span / count).log10().floor());
    let error = count / span * step;
    if error <= 0.15 {
        step *= 10.0;
    } else if error <= 0.35 {
        step *= 5.0;
    } else if error <= 0.75 {
        step *= 2.0;
    }
    Some(step)
}

/// Decimal places needed to print multiples of `step` exactly.
#[must_use]
pub fn step_precision(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let digits = -(step.log10() + 0.01).floor();
    if digits <= 0.0 { 0 } else { digits as usize }
}

/// Formats a value tick with the precision implied by `step` and comma
/// thousands grouping, e.g. `1,250` or `0.5`.
#[must_use]
pub fn format_linear_tick(value: f64, step: Option<f64>) -> String {
    let text = match step {
        Some(step) => format!("{:.*}", step_precision(step), value),
        None => format!("{}", value),
    };
    let text = if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_owned()
    } else {
        text
    };
    group_thousands(&text)
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

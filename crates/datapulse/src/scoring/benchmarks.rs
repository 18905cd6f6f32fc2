use serde::Serialize;

/// Per-industry score distribution on the answer scale. These figures are
/// simulated market data, not an aggregate over real submissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndustryBenchmark {
    pub mean: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
}

const FALLBACK: IndustryBenchmark = IndustryBenchmark {
    mean: 2.7,
    p25: 2.0,
    p50: 2.6,
    p75: 3.3,
    p90: 3.9,
};

/// Lookup table keyed by industry, with `other` as the fallback row.
#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    rows: Vec<(&'static str, IndustryBenchmark)>,
}

impl BenchmarkTable {
    /// The built-in simulated market distribution.
    pub fn simulated() -> Self {
        Self {
            rows: vec![
                ("finance", IndustryBenchmark { mean: 3.2, p25: 2.5, p50: 3.0, p75: 3.8, p90: 4.3 }),
                ("retail", IndustryBenchmark { mean: 2.8, p25: 2.1, p50: 2.7, p75: 3.4, p90: 4.0 }),
                ("manufacturing", IndustryBenchmark { mean: 2.5, p25: 1.9, p50: 2.4, p75: 3.1, p90: 3.7 }),
                ("healthcare", IndustryBenchmark { mean: 2.7, p25: 2.0, p50: 2.6, p75: 3.3, p90: 3.9 }),
                ("telecom", IndustryBenchmark { mean: 3.0, p25: 2.3, p50: 2.9, p75: 3.6, p90: 4.2 }),
                ("energy", IndustryBenchmark { mean: 2.6, p25: 2.0, p50: 2.5, p75: 3.2, p90: 3.8 }),
                ("transport", IndustryBenchmark { mean: 2.4, p25: 1.8, p50: 2.3, p75: 3.0, p90: 3.6 }),
                ("public", IndustryBenchmark { mean: 2.3, p25: 1.7, p50: 2.2, p75: 2.9, p90: 3.5 }),
                ("tech", IndustryBenchmark { mean: 3.5, p25: 2.8, p50: 3.4, p75: 4.1, p90: 4.6 }),
                ("other", FALLBACK),
            ],
        }
    }

    pub fn from_rows(rows: Vec<(&'static str, IndustryBenchmark)>) -> Self {
        Self { rows }
    }

    /// Resolve an industry key, falling back to the `other` row (or a fixed
    /// default if a custom table omits it) so lookups are total.
    pub fn lookup(&self, industry: &str) -> IndustryBenchmark {
        self.rows
            .iter()
            .find(|(key, _)| *key == industry)
            .or_else(|| self.rows.iter().find(|(key, _)| *key == "other"))
            .map(|(_, row)| *row)
            .unwrap_or(FALLBACK)
    }
}

/// Piecewise-linear percentile of `score` against the benchmark row, using
/// the scale endpoints 0 and `scale_max` for the outer segments. Clamped to
/// [1, 99] so the extremes never claim absolute certainty.
pub(crate) fn market_position(score: f64, benchmark: &IndustryBenchmark, scale_max: f64) -> u8 {
    let position = if score <= benchmark.p25 {
        segment(score, 0.0, benchmark.p25, 0.0, 25.0)
    } else if score <= benchmark.p50 {
        segment(score, benchmark.p25, benchmark.p50, 25.0, 25.0)
    } else if score <= benchmark.p75 {
        segment(score, benchmark.p50, benchmark.p75, 50.0, 25.0)
    } else if score <= benchmark.p90 {
        segment(score, benchmark.p75, benchmark.p90, 75.0, 15.0)
    } else {
        segment(score, benchmark.p90, scale_max, 90.0, 10.0)
    };

    position.clamp(1.0, 99.0) as u8
}

fn segment(score: f64, lower: f64, upper: f64, base: f64, span: f64) -> f64 {
    if upper <= lower {
        return base;
    }
    base + ((score - lower) / (upper - lower) * span).round()
}

//! # Calculator Metrics
//!
//! Lock-free counters behind `GET /metrics`, rendered in the Prometheus
//! text exposition format.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// The calculations the API performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculation {
    Purity,
    Classify,
    Price,
}

impl Calculation {
    const ALL: [Self; 3] = [Self::Purity, Self::Classify, Self::Price];

    const fn index(self) -> usize {
        match self {
            Self::Purity => 0,
            Self::Classify => 1,
            Self::Price => 2,
        }
    }

    /// Label value used in the exposition output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Purity => "purity",
            Self::Classify => "classify",
            Self::Price => "price",
        }
    }
}

/// Completed and rejected counts per calculation.
#[derive(Debug, Default)]
pub struct CalculatorMetrics {
    completed: [AtomicU64; 3],
    rejected: [AtomicU64; 3],
}

impl CalculatorMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a calculation that produced a result.
    pub fn record_completed(&self, calculation: Calculation) {
        self.completed[calculation.index()].fetch_add(1, Ordering::Relaxed);
    }

    /// Count a calculation refused because of its input.
    pub fn record_rejected(&self, calculation: Calculation) {
        self.rejected[calculation.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn completed(&self, calculation: Calculation) -> u64 {
        self.completed[calculation.index()].load(Ordering::Relaxed)
    }

    pub fn rejected(&self, calculation: Calculation) -> u64 {
        self.rejected[calculation.index()].load(Ordering::Relaxed)
    }

    /// Render all counters plus the size of the standard table.
    pub fn render(&self, standards_loaded: usize) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "# HELP aurum_calculations_total Calculations completed, by kind."
        );
        let _ = writeln!(out, "# TYPE aurum_calculations_total counter");
        for calc in Calculation::ALL {
            let _ = writeln!(
                out,
                "aurum_calculations_total{{kind=\"{}\"}} {}",
                calc.label(),
                self.completed(calc)
            );
        }

        let _ = writeln!(
            out,
            "# HELP aurum_rejections_total Calculations rejected for invalid input, by kind."
        );
        let _ = writeln!(out, "# TYPE aurum_rejections_total counter");
        for calc in Calculation::ALL {
            let _ = writeln!(
                out,
                "aurum_rejections_total{{kind=\"{}\"}} {}",
                calc.label(),
                self.rejected(calc)
            );
        }

        let _ = writeln!(
            out,
            "# HELP aurum_standards_loaded Entries in the gold standard table."
        );
        let _ = writeln!(out, "# TYPE aurum_standards_loaded gauge");
        let _ = writeln!(out, "aurum_standards_loaded {}", standards_loaded);

        out
    }
}

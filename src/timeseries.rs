// Sliding window of (label, value) points feeding the realtime trend chart.

use crate::chart::ChartData;

/// Points kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 20;

/// Bounded FIFO, oldest point first.
///
/// Labels and values live in two parallel sequences so the realtime chart
/// can be redrawn straight from them without reshaping.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesBuffer {
    capacity: usize,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Default for TimeSeriesBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl TimeSeriesBuffer {
    /// `capacity` is clamped to at least one point.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            labels: Vec::with_capacity(capacity + 1),
            values: Vec::with_capacity(capacity + 1),
        }
    }

    /// Push to the back, then evict from the front until `len() <= capacity()`.
    /// Does not redraw anything; the caller does that right after.
    pub fn append(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
        if self.labels.len() > self.capacity {
            let overflow = self.labels.len() - self.capacity;
            self.labels.drain(..overflow);
            self.values.drain(..overflow);
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Oldest-first `(label, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn latest(&self) -> Option<(&str, f64)> {
        self.points().last()
    }

    /// Borrowed view handed to the chart backend on redraw.
    pub fn as_chart_data(&self) -> ChartData<'_> {
        ChartData {
            labels: &self.labels,
            values: &self.values,
        }
    }
}

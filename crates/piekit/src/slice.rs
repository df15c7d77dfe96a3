use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

pub const FULL_CIRCLE_DEG: f64 = 360.0;

const ANGLE_EPSILON: f64 = 1e-9;

#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct SliceName(String);

crate::impl_string_newtype!(SliceName);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default)]
    pub name: SliceName,
    pub value: f64,
}

impl DataPoint {
    pub fn new(value: f64, name: impl Into<String>) -> Self {
        Self {
            name: SliceName::new(name),
            value,
        }
    }

    /// Unnamed points, one per integer.
    pub fn from_integers(values: &[i64]) -> Vec<Self> {
        values.iter().map(|&v| Self::new(v as f64, "")).collect()
    }
}

static NEXT_SLICE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique tag for UI diffing. Carries no meaning beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct SliceId(u64);

impl SliceId {
    fn next() -> Self {
        Self(NEXT_SLICE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Slice {
    pub id: SliceId,
    pub start_deg: f64,
    pub end_deg: f64,
    pub value: f64,
    pub normalized_value: f64,
}

// ids are ignored: two computations over the same data yield equal slices
impl PartialEq for Slice {
    fn eq(&self, other: &Self) -> bool {
        self.start_deg == other.start_deg
            && self.end_deg == other.end_deg
            && self.value == other.value
            && self.normalized_value == other.normalized_value
    }
}

impl Slice {
    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    pub fn mid_angle_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg() / 2.0
    }

    pub fn percentage(&self) -> f64 {
        self.sweep_deg() / FULL_CIRCLE_DEG * 100.0
    }

    pub fn percentage_label(&self) -> String {
        format!("{:.0}%", self.percentage())
    }

    pub fn is_full_circle(&self) -> bool {
        (self.sweep_deg() - FULL_CIRCLE_DEG).abs() < ANGLE_EPSILON
    }

    /// Strictly inside: an angle sitting on either edge belongs to no slice.
    pub fn contains_angle(&self, angle_deg: f64) -> bool {
        self.start_deg < angle_deg && angle_deg < self.end_deg
    }

    /// Offset from the pie center to where this slice's label goes, `factor`
    /// of the way out along the mid-angle. A full circle keeps its label
    /// centered.
    pub fn label_offset(&self, radius: f64, factor: f64) -> (f64, f64) {
        if self.is_full_circle() {
            return (0.0, 0.0);
        }
        let theta = self.mid_angle_deg().to_radians();
        (
            theta.cos() * radius * factor,
            theta.sin() * radius * factor,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SliceError {
    #[error("data values sum to zero")]
    ZeroTotal,
    #[error("data point {index} has invalid value {value}")]
    InvalidValue { index: usize, value: f64 },
}

/// Lays the points out around the circle in input order, each one taking a
/// share of 360° proportional to its value.
///
/// An empty input gives no slices. A non-empty input summing to zero is
/// rejected with [`SliceError::ZeroTotal`] rather than producing NaN angles.
pub fn compute_slices(points: &[DataPoint]) -> Result<Vec<Slice>, SliceError> {
    if let Some((index, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !p.value.is_finite() || p.value < 0.0)
    {
        return Err(SliceError::InvalidValue {
            index,
            value: p.value,
        });
    }

    if points.is_empty() {
        return Ok(Vec::new());
    }

    let total: f64 = points.iter().map(|p| p.value).sum();
    if total <= 0.0 {
        return Err(SliceError::ZeroTotal);
    }

    Ok(points
        .iter()
        .scan(0.0, |last_end, p| {
            let normalized_value = p.value / total;
            let start_deg = *last_end;
            let end_deg = start_deg + normalized_value * FULL_CIRCLE_DEG;
            *last_end = end_deg;

            Some(Slice {
                id: SliceId::next(),
                start_deg,
                end_deg,
                value: p.value,
                normalized_value,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        let slices = compute_slices(&DataPoint::from_integers(&[8, 23, 54])).unwrap();
        assert_eq!(slices.len(), 3);

        let expected = [(0.0, 33.88), (33.88, 131.29), (131.29, 360.0)];
        for (slice, (start, end)) in slices.iter().zip(expected) {
            assert!((slice.start_deg - start).abs() < 0.01, "{:?}", slice);
            assert!((slice.end_deg - end).abs() < 0.01, "{:?}", slice);
        }

        let normalized: Vec<f64> = slices.iter().map(|s| s.normalized_value).collect();
        for (n, e) in normalized.iter().zip([0.0941, 0.2706, 0.6353]) {
            assert!((n - e).abs() < 1e-4);
        }
    }

    #[test]
    fn test_slices_are_contiguous() {
        let data = DataPoint::from_integers(&[8, 23, 54, 32, 12, 37, 7, 23, 43]);
        let slices = compute_slices(&data).unwrap();

        assert_eq!(slices[0].start_deg, 0.0);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_deg, pair[1].start_deg);
        }
        assert!((slices.last().unwrap().end_deg - 360.0).abs() < 1e-9);

        let sum: f64 = slices.iter().map(|s| s.normalized_value).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_values_preserved_in_order() {
        let data = vec![DataPoint::new(3.0, "a"), DataPoint::new(1.0, "b")];
        let slices = compute_slices(&data).unwrap();
        assert_eq!(slices[0].value, 3.0);
        assert_eq!(slices[1].value, 1.0);
        assert_eq!(slices[0].end_deg, 270.0);
    }

    #[test]
    fn test_zero_total_rejected() {
        assert_eq!(
            compute_slices(&DataPoint::from_integers(&[0])),
            Err(SliceError::ZeroTotal)
        );
        assert_eq!(
            compute_slices(&DataPoint::from_integers(&[0, 0, 0])),
            Err(SliceError::ZeroTotal)
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compute_slices(&[]), Ok(Vec::new()));
    }

    #[test]
    fn test_negative_value_rejected() {
        let data = vec![DataPoint::new(1.0, "a"), DataPoint::new(-2.0, "b")];
        assert_eq!(
            compute_slices(&data),
            Err(SliceError::InvalidValue {
                index: 1,
                value: -2.0
            })
        );
    }

    #[test]
    fn test_zero_value_slice_is_empty_wedge() {
        let slices = compute_slices(&DataPoint::from_integers(&[1, 0, 1])).unwrap();
        assert_eq!(slices[1].sweep_deg(), 0.0);
        assert!(!slices[1].contains_angle(180.0));
    }

    #[test]
    fn test_idempotent() {
        let data = DataPoint::from_integers(&[5, 9, 2]);
        assert_eq!(compute_slices(&data), compute_slices(&data));
    }

    #[test]
    fn test_ids_are_unique() {
        let slices = compute_slices(&DataPoint::from_integers(&[1, 2, 3])).unwrap();
        assert_ne!(slices[0].id, slices[1].id);
        assert_ne!(slices[1].id, slices[2].id);
    }

    #[test]
    fn test_percentage_and_label() {
        let slices = compute_slices(&DataPoint::from_integers(&[1, 3])).unwrap();
        assert_eq!(slices[0].percentage_label(), "25%");
        assert_eq!(slices[1].percentage_label(), "75%");
    }

    #[test]
    fn test_label_offset() {
        let slices = compute_slices(&DataPoint::from_integers(&[1, 1])).unwrap();
        // first slice spans 0..180, mid-angle 90 points straight down
        let (dx, dy) = slices[0].label_offset(100.0, 0.75);
        assert!(dx.abs() < 1e-9);
        assert!((dy - 75.0).abs() < 1e-9);

        let whole = compute_slices(&DataPoint::from_integers(&[4])).unwrap();
        assert!(whole[0].is_full_circle());
        assert_eq!(whole[0].label_offset(100.0, 0.75), (0.0, 0.0));
    }
}

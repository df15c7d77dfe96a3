use crate::hit::{self, Bounds, Point};
use crate::slice::Slice;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Point),
    Ended,
}

/// What the pointer is doing to the chart right now.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchState {
    pub active_index: Option<usize>,
    pub location: Option<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchUpdate {
    pub state: TouchState,
    pub should_redraw: bool,
    pub index_changed: bool,
}

impl TouchState {
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Next state after `event`.
    ///
    /// Inside the circle the location is tracked and the active index follows
    /// the slice under the pointer (or none, on a boundary). Leaving the circle
    /// or lifting the pointer clears both.
    pub fn apply(self, event: PointerEvent, bounds: &Bounds, slices: &[Slice]) -> TouchUpdate {
        let next = match event {
            PointerEvent::Moved(point) if hit::is_inside(point, bounds) => Self {
                active_index: hit::slice_at(hit::angle_of(point, bounds), slices),
                location: Some(point),
            },
            PointerEvent::Moved(_) | PointerEvent::Ended => Self::cleared(),
        };

        TouchUpdate {
            state: next,
            should_redraw: next != self,
            index_changed: next.active_index != self.active_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::{DataPoint, compute_slices};

    fn setup() -> (Bounds, Vec<Slice>) {
        let slices = compute_slices(&DataPoint::from_integers(&[1, 1, 2])).unwrap();
        (Bounds::from_size(100.0, 100.0), slices)
    }

    #[test]
    fn test_move_inside_activates_slice() {
        let (bounds, slices) = setup();
        let point = Point::new(80.0, 70.0);
        let update = TouchState::cleared().apply(PointerEvent::Moved(point), &bounds, &slices);

        assert_eq!(update.state.active_index, Some(0));
        assert_eq!(update.state.location, Some(point));
        assert!(update.should_redraw);
        assert!(update.index_changed);
    }

    #[test]
    fn test_move_within_same_slice_keeps_index() {
        let (bounds, slices) = setup();
        let first = TouchState::cleared()
            .apply(PointerEvent::Moved(Point::new(80.0, 70.0)), &bounds, &slices)
            .state;
        let update = first.apply(PointerEvent::Moved(Point::new(75.0, 65.0)), &bounds, &slices);

        assert_eq!(update.state.active_index, Some(0));
        assert!(!update.index_changed);
        assert!(update.should_redraw);
    }

    #[test]
    fn test_move_outside_clears() {
        let (bounds, slices) = setup();
        let active = TouchState {
            active_index: Some(2),
            location: Some(Point::new(50.0, 20.0)),
        };
        let update = active.apply(PointerEvent::Moved(Point::new(0.0, 0.0)), &bounds, &slices);

        assert_eq!(update.state, TouchState::cleared());
        assert!(update.index_changed);
    }

    #[test]
    fn test_end_clears() {
        let (bounds, slices) = setup();
        let active = TouchState {
            active_index: Some(1),
            location: Some(Point::new(20.0, 70.0)),
        };
        let update = active.apply(PointerEvent::Ended, &bounds, &slices);
        assert_eq!(update.state, TouchState::cleared());

        let again = update.state.apply(PointerEvent::Ended, &bounds, &slices);
        assert!(!again.should_redraw);
        assert!(!again.index_changed);
    }

    #[test]
    fn test_boundary_keeps_location_without_index() {
        let (bounds, slices) = setup();
        // straight down from the center is exactly 90°, between slices 0 and 1
        let point = Point::new(50.0, 80.0);
        let update = TouchState::cleared().apply(PointerEvent::Moved(point), &bounds, &slices);

        assert_eq!(update.state.active_index, None);
        assert_eq!(update.state.location, Some(point));
    }
}

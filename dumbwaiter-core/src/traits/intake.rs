//! Call button intake

use crate::floor::Floor;

/// Source of floor calls
///
/// Polled by the control loop only while the cabin is idle with the door
/// closed.
pub trait RequestIntake {
    /// Check if the call for `floor` is active
    fn is_button_pressed(&mut self, floor: Floor) -> bool;

    /// Select the call to serve, if any
    ///
    /// Scans floors in ascending order and returns the first pressed one
    /// other than `current`.
    fn pending_request(&mut self, current: Floor, floor_count: u8) -> Option<Floor> {
        Floor::all(floor_count)
            .filter(|floor| *floor != current)
            .find(|floor| self.is_button_pressed(*floor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Buttons(&'static [u8]);

    impl RequestIntake for Buttons {
        fn is_button_pressed(&mut self, floor: Floor) -> bool {
            self.0.contains(&floor.number())
        }
    }

    fn floor(n: u8) -> Floor {
        Floor::new(n, 3).unwrap()
    }

    #[test]
    fn test_no_press() {
        assert_eq!(Buttons(&[]).pending_request(floor(1), 3), None);
    }

    #[test]
    fn test_lowest_press_wins() {
        assert_eq!(Buttons(&[3, 2]).pending_request(floor(1), 3), Some(floor(2)));
    }

    #[test]
    fn test_current_floor_skipped() {
        assert_eq!(Buttons(&[1, 3]).pending_request(floor(1), 3), Some(floor(3)));
        assert_eq!(Buttons(&[2]).pending_request(floor(2), 3), None);
    }

    #[test]
    fn test_floors_beyond_count_never_scanned() {
        assert_eq!(Buttons(&[5]).pending_request(floor(1), 3), None);
    }
}

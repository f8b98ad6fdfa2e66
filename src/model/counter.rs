use super::error::StateError;

/// Integer clamped to an inclusive range.
///
/// The only mutations are single steps up or down; a step that would leave
/// the range is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedCounter {
    value: i64,
    min: i64,
    max: i64,
}

impl BoundedCounter {
    pub fn new(initial: i64, min: i64, max: i64) -> Result<Self, StateError> {
        if min > max || initial < min || initial > max {
            return Err(StateError::InvalidState {
                value: initial,
                min,
                max,
            });
        }
        Ok(Self {
            value: initial,
            min,
            max,
        })
    }

    /// Step up by one. Returns `false` (and changes nothing) at the upper bound.
    pub fn increment(&mut self) -> bool {
        if self.value < self.max {
            self.value += 1;
            true
        } else {
            false
        }
    }

    /// Step down by one. Returns `false` (and changes nothing) at the lower bound.
    pub fn decrement(&mut self) -> bool {
        if self.value > self.min {
            self.value -= 1;
            true
        } else {
            false
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn at_max(&self) -> bool {
        self.value == self.max
    }

    pub fn at_min(&self) -> bool {
        self.value == self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            BoundedCounter::new(9, 0, 8),
            Err(StateError::InvalidState { value: 9, min: 0, max: 8 })
        );
        assert!(BoundedCounter::new(-1, 0, 8).is_err());
        assert!(BoundedCounter::new(3, 5, 2).is_err());
        assert!(BoundedCounter::new(0, 0, 0).is_ok());
    }

    #[test]
    fn test_increment_stops_at_max() {
        let mut c = BoundedCounter::new(7, 0, 8).unwrap();
        assert!(c.increment());
        assert_eq!(c.value(), 8);
        assert!(c.at_max());
        assert!(!c.increment());
        assert_eq!(c.value(), 8);
    }

    #[test]
    fn test_decrement_stops_at_min() {
        let mut c = BoundedCounter::new(1, 0, 8).unwrap();
        assert!(c.decrement());
        assert!(c.at_min());
        assert!(!c.decrement());
        assert_eq!(c.value(), 0);
    }

    #[test]
    fn test_mixed_sequence_stays_in_bounds() {
        let mut c = BoundedCounter::new(1, 0, 8).unwrap();
        // deterministic pseudo-random walk
        let mut seed: u32 = 0x9e37_79b9;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 3 == 0 {
                c.decrement();
            } else {
                c.increment();
            }
            assert!(c.value() >= c.min() && c.value() <= c.max());
        }
    }
}

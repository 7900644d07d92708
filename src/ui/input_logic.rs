/// Move selection cursor one item left; stays on the first item.
pub fn select_prev(selected: u8) -> u8 {
    selected.saturating_sub(1)
}

/// Move selection cursor one item right if another item exists.
pub fn select_next(selected: u8, item_count: usize) -> u8 {
    if (selected as usize) + 1 < item_count {
        selected + 1
    } else {
        selected
    }
}

/// Decrement `value`, never going below `min`.
pub fn step_down(value: u8, min: u8) -> u8 {
    if value > min {
        value - 1
    } else {
        min
    }
}

/// Increment `value`, never going above `max`.
pub fn step_up(value: u8, max: u8) -> u8 {
    if value < max {
        value + 1
    } else {
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_boundaries() {
        assert_eq!(select_prev(0), 0);
        assert_eq!(select_prev(2), 1);
        assert_eq!(select_next(0, 1), 0);
        assert_eq!(select_next(0, 3), 1);
        assert_eq!(select_next(2, 3), 2);
        assert_eq!(select_next(1, 2), 1);
    }

    #[test]
    fn steps_clamp_at_bounds() {
        assert_eq!(step_down(0, 0), 0);
        assert_eq!(step_down(60, 0), 59);
        assert_eq!(step_up(149, 150), 150);
        assert_eq!(step_up(150, 150), 150);
    }

    #[test]
    fn steps_pull_out_of_range_values_back() {
        assert_eq!(step_down(5, 10), 10);
        assert_eq!(step_up(200, 150), 150);
    }
}

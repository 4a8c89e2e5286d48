use crate::Position;

/// Seat acting after `seat` at a table of `n`. Also the target of a `Right`.
pub fn after(seat: Position, n: usize) -> Position {
    debug_assert!(seat < n);
    (seat + 1) % n
}

/// Seat acting before `seat` at a table of `n`. Also the target of a `Left`.
pub fn before(seat: Position, n: usize) -> Position {
    debug_assert!(seat < n);
    (seat + n - 1) % n
}

/// Two distinct mutable elements of one slice, in argument order.
pub fn pair_mut<T>(items: &mut [T], a: Position, b: Position) -> (&mut T, &mut T) {
    assert_ne!(a, b, "pair_mut needs distinct indices");
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

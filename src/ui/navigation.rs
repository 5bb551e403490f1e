//! Shared selection helpers for rows and tabs
//!
//! Pure functions that compute the new selection without side effects.
//! Each screen calls these with its own state and applies the results.

/// Move selection down by one, clamped to max_index.
pub fn select_next(selected: usize, max_index: usize) -> usize {
    selected.saturating_add(1).min(max_index)
}

/// Move selection up by one.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Next index in a ring of `len` items. An empty ring stays at 0.
pub fn wrap_next(selected: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (selected + 1) % len }
}

/// Previous index in a ring of `len` items. An empty ring stays at 0.
pub fn wrap_prev(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (selected + len - 1) % len
    }
}

/// Add `delta` to `value`, clamped to `min..=max`
pub fn clamp_step(value: u32, delta: i32, min: u32, max: u32) -> u32 {
    let stepped = i64::from(value) + i64::from(delta);
    stepped.clamp(i64::from(min), i64::from(max)) as u32
}

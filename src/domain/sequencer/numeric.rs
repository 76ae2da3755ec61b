//! Bounded integer counter for purely numeric postal codes.

/// Largest value representable with `width` decimal digits.
pub fn max_for_width(width: usize) -> u64 {
    u32::try_from(width)
        .ok()
        .and_then(|w| 10u64.checked_pow(w))
        .map_or(u64::MAX, |limit| limit - 1)
}

/// `number + 1` rendered with `width` digits, `None` past the largest value.
pub fn successor(number: u64, width: usize) -> Option<String> {
    if number >= max_for_width(width) {
        return None;
    }
    Some(render(number + 1, width))
}

/// `number - 1` rendered with `width` digits, `None` below zero.
pub fn predecessor(number: u64, width: usize) -> Option<String> {
    number.checked_sub(1).map(|previous| render(previous, width))
}

fn render(number: u64, width: usize) -> String {
    format!("{number:0width$}")
}

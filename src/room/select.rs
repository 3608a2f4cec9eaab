use tracing::debug;

use crate::error::{RoomError, RoomResult};
use crate::room::Member;

/// Returns the member whose name sorts first under plain `str` ordering
/// (UTF-8 byte order, which matches code-point order).
///
/// When several members share the smallest name the earliest one wins.
/// The slice is only borrowed, so the caller's order is left untouched.
pub fn first_by_name(members: &[Member]) -> RoomResult<&Member> {
    // min_by keeps the first of equal minima
    let first = members
        .iter()
        .min_by(|a, b| a.name().cmp(b.name()))
        .ok_or(RoomError::EmptyInput)?;

    debug!("Selected {} out of {} members", first, members.len());
    Ok(first)
}

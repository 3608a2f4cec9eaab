use std::io::Write;

use tracing::info;

use crate::error::RoomResult;
use crate::room::ChatRoom;

/// Writes the room, its first member by name, and the room again.
pub fn run<W: Write>(room: &ChatRoom, out: &mut W) -> RoomResult<()> {
    writeln!(out, "chat_room.members = {}", room)?;

    let first_sorted = room.first_by_name()?;
    info!("First member by name: {}", first_sorted.name());
    writeln!(out, "first_sorted = {}", first_sorted)?;

    writeln!(out, "chat_room.members = {}", room)?;
    Ok(())
}

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{RoomError, RoomResult};
use crate::room::{ChatRoom, Member};

pub const SAMPLE_MEMBERS: [&str; 3] = ["멤버1", "멤버2", "멤버3"];

#[derive(Deserialize, Default)]
pub struct DemoConfig {
    #[serde(default)]
    pub room: Room,
}

#[derive(Deserialize)]
pub struct Room {
    #[serde(default = "sample_members")]
    pub members: Vec<String>,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            members: sample_members(),
        }
    }
}

fn sample_members() -> Vec<String> {
    SAMPLE_MEMBERS.iter().map(|name| name.to_string()).collect()
}

impl DemoConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> RoomResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> RoomResult<Self> {
        toml::from_str(contents).map_err(|e| RoomError::Config(e.to_string()))
    }

    pub fn chat_room(&self) -> ChatRoom {
        self.room.members.iter().map(|name| Member::new(name.as_str())).collect()
    }
}

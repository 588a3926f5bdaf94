use crate::client::{Result, Session};
use log::info;
use reqwest::Method;
use std::fmt;

/// Direction of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
    /// Remove a previous vote.
    Clear,
}

impl VoteDirection {
    pub fn as_i8(&self) -> i8 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
            VoteDirection::Clear => 0,
        }
    }
}

impl TryFrom<i8> for VoteDirection {
    type Error = i8;

    fn try_from(value: i8) -> std::result::Result<Self, i8> {
        match value {
            1 => Ok(VoteDirection::Up),
            -1 => Ok(VoteDirection::Down),
            0 => Ok(VoteDirection::Clear),
            other => Err(other),
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

impl Session {
    /// Vote on a link or comment.
    ///
    /// Reddit requires votes to be cast by humans: proxying a person's action
    /// one-for-one is fine, bots deciding how to vote are not.
    pub async fn vote(&self, fullname: &str, direction: VoteDirection) -> Result<()> {
        info!("Voting {} on {}", direction, fullname);

        let dir = direction.to_string();
        let form = [("id", fullname), ("dir", dir.as_str())];
        self.call(Method::POST, "/api/vote", &form).await?;
        Ok(())
    }
}

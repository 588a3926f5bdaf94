//! Operations module provides the Reddit API calls available on a `Session`

pub mod comments;
pub mod links;
pub mod users;
pub mod voting;

pub use links::SubmitKind;
pub use voting::VoteDirection;

//! Client for Reddit's OAuth API.
//!
//! A [`Session`] logs in with the password grant of a "script" app and then
//! exposes the API calls as async methods:
//!
//! ```no_run
//! use redkit::{ListingOptions, Session, VoteDirection};
//!
//! # async fn run() -> redkit::Result<()> {
//! let session = Session::new("user", "password", "app-id", "app-secret", "my-bot/0.1").await?;
//!
//! let page = session
//!     .list_links("rust", "new", &ListingOptions::default().with_limit(10))
//!     .await?;
//! for link in &page.links {
//!     println!("{}", link.format_short_summary());
//! }
//!
//! if let Some(first) = page.links.first() {
//!     session.vote(&first.fullname, VoteDirection::Up).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod models;
pub mod operations;

pub use client::{Credentials, Endpoints, RedditError, Result, Session};
pub use models::{Comment, Edited, Link, LinkList, ListingOptions, Me, Reply, User};
pub use operations::{SubmitKind, VoteDirection};

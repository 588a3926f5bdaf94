use serde::Deserialize;

pub mod comment;
pub mod link;
pub mod listing;
pub mod user;

pub use comment::{Comment, Edited, Reply};
pub use link::{Link, LinkList};
pub use listing::ListingOptions;
pub use user::{Me, User};

/// The `{kind, data}` envelope Reddit wraps every object in.
///
/// `kind` is the type prefix of the object: `t1` comment, `t2` account,
/// `t3` link, `t5` subreddit, `Listing` for pages and `more` for the
/// "load more comments" placeholder.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Thing<T> {
    #[serde(default)]
    pub kind: String,
    pub data: T,
}

/// One page of a paginated collection.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Listing<T> {
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default = "Vec::new")]
    pub children: Vec<Thing<T>>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            before: None,
            after: None,
            children: Vec::new(),
        }
    }
}

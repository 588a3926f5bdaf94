use super::{Listing, Thing};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Whether and when a comment was edited.
///
/// Reddit sends `false` for unedited comments and the edit time (epoch
/// seconds) for edited ones, depending on the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Edited {
    #[default]
    Absent,
    NotEdited,
    At(f64),
}

impl Edited {
    pub fn is_edited(&self) -> bool {
        matches!(self, Edited::At(_))
    }

    pub fn timestamp(&self) -> Option<f64> {
        match self {
            Edited::At(at) => Some(*at),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Edited {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Never fails on the value itself: unknown encodings decode as Absent.
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(false) => Edited::NotEdited,
            Value::Number(n) => n.as_f64().map(Edited::At).unwrap_or_default(),
            _ => Edited::Absent,
        })
    }
}

/// A reply to a link or another comment.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Comment {
    #[serde(rename = "name")]
    pub fullname: String,
    pub id: String,
    #[serde(rename = "parent_id")]
    pub parent: String,
    pub link_id: String,
    pub title: Option<String>,

    pub author: String,
    pub subreddit: String,

    pub body: String,
    pub body_html: String,

    pub score: i64,
    pub ups: i64,
    pub downs: i64,
    pub score_hidden: bool,
    pub gilded: i64,

    pub archived: bool,
    pub edited: Edited,
    pub created_utc: f64,

    pub replies: Reply,
}

/// A page of comments, either a whole comment listing or the children of
/// one comment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reply {
    pub comments: Vec<Comment>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl Reply {
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Every comment in the tree, parents before their children.
    pub fn flatten(&self) -> Vec<&Comment> {
        let mut out = Vec::new();
        for comment in &self.comments {
            out.push(comment);
            out.extend(comment.replies.flatten());
        }
        out
    }
}

impl From<Listing<Comment>> for Reply {
    fn from(listing: Listing<Comment>) -> Self {
        Self {
            comments: listing
                .children
                .into_iter()
                .filter(|thing| thing.kind != "more")
                .map(|thing| thing.data)
                .collect(),
            before: listing.before,
            after: listing.after,
        }
    }
}

impl<'de> Deserialize<'de> for Reply {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Comments without replies carry `"replies": ""` instead of a listing.
        match Value::deserialize(deserializer)? {
            value @ Value::Object(_) => {
                let page: Thing<Listing<Comment>> =
                    serde_json::from_value(value).map_err(serde::de::Error::custom)?;
                Ok(page.data.into())
            }
            _ => Ok(Reply::default()),
        }
    }
}

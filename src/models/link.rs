use super::Listing;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

/// A submitted post, as returned by the listing endpoints.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Link {
    // Identity
    #[serde(rename = "name")]
    pub fullname: String,
    pub id: String,
    pub permalink: String,
    pub url: String,
    pub domain: String,

    // Content
    pub title: String,
    pub selftext: String,
    pub selftext_html: Option<String>,
    pub thumbnail: String,
    pub link_flair_text: Option<String>,

    // Authorship
    pub author: String,
    pub subreddit: String,

    // Metrics
    pub score: i64,
    pub ups: i64,
    pub downs: i64,
    pub num_comments: i64,
    pub gilded: i64,

    // Status and display flags
    pub archived: bool,
    pub locked: bool,
    pub stickied: bool,
    pub spoiler: bool,
    pub is_self: bool,
    pub clicked: bool,
    pub hide_score: bool,
    pub over_18: bool,

    pub created_utc: f64,
}

impl Link {
    /// Creation time, if the timestamp is in range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.created_utc as i64, 0).single()
    }

    /// Format a post for display with important metadata
    pub fn format_summary(&self) -> String {
        let mut content = format!(
            "Title: {}\nFullname: {}\nAuthor: u/{}\nSubreddit: r/{}\nScore: {} (+{}/-{}) | Comments: {}\n",
            self.title,
            self.fullname,
            self.author,
            self.subreddit,
            self.score,
            self.ups,
            self.downs,
            self.num_comments,
        );

        let mut flags = Vec::new();
        if self.is_self {
            flags.push("Self Post");
        }
        if self.over_18 {
            flags.push("NSFW");
        }
        if self.spoiler {
            flags.push("Spoiler");
        }
        if self.stickied {
            flags.push("Stickied");
        }
        if self.locked {
            flags.push("Locked");
        }
        if self.archived {
            flags.push("Archived");
        }
        if !flags.is_empty() {
            content.push_str(&format!("Flags: [{}]\n", flags.join(", ")));
        }

        if let Some(flair) = self.link_flair_text.as_deref().filter(|f| !f.is_empty()) {
            content.push_str(&format!("Flair: {}\n", flair));
        }

        if let Some(created) = self.created_at() {
            content.push_str(&format!(
                "Created: {}\n",
                created.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        content.push_str(&format!("Permalink: https://reddit.com{}", self.permalink));
        if !self.is_self {
            content.push_str(&format!("\nURL: {}", self.url));
        }

        content
    }

    /// Get a short summary for the post (title, author, score)
    pub fn format_short_summary(&self) -> String {
        format!(
            "[r/{} | {} pts] {} - by u/{} ({})",
            self.subreddit, self.score, self.title, self.author, self.fullname
        )
    }
}

/// A page of links plus the cursors for the neighbouring pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkList {
    pub links: Vec<Link>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl From<Listing<Link>> for LinkList {
    fn from(listing: Listing<Link>) -> Self {
        Self {
            links: listing.children.into_iter().map(|thing| thing.data).collect(),
            before: listing.before,
            after: listing.after,
        }
    }
}

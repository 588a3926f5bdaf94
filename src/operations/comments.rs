use crate::client::{Result, Session};
use crate::models::{ListingOptions, Reply};
use log::{debug, info};
use reqwest::Method;

impl Session {
    /// Reply to a link or comment. `parent` is its fullname (`t3_...` for a
    /// link, `t1_...` for a comment).
    pub async fn comment(&self, parent: &str, text: &str) -> Result<()> {
        info!("Commenting on {}", parent);

        let form = [("api_type", "json"), ("text", text), ("thing_id", parent)];
        self.call(Method::POST, "/api/comment", &form).await?;
        Ok(())
    }

    /// List the comments of one link, or the latest comments of the whole
    /// subreddit when `link_id` is `None`.
    pub async fn list_comments(
        &self,
        subreddit: &str,
        link_id: Option<&str>,
        options: &ListingOptions,
    ) -> Result<Reply> {
        let path = match link_id.filter(|id| !id.is_empty()) {
            Some(id) => format!("/r/{}/comments/{}", subreddit, id),
            None => format!("/r/{}/comments", subreddit),
        };

        let json = self.call(Method::GET, &path, &options.to_params()).await?;
        let reply: Reply = serde_json::from_value(json)?;
        debug!("Fetched {} top-level comments from {}", reply.len(), path);

        Ok(reply)
    }

    /// The latest comments across every link of a subreddit.
    pub async fn list_subreddit_comments(
        &self,
        subreddit: &str,
        options: &ListingOptions,
    ) -> Result<Reply> {
        self.list_comments(subreddit, None, options).await
    }
}

use crate::client::{Result, Session};
use crate::models::{Link, LinkList, Listing, ListingOptions, Thing};
use log::{debug, info};
use reqwest::Method;
use std::fmt;

/// What kind of post [`Session::submit`] creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    /// A text post; the content is its markdown body.
    SelfPost,
    /// A link post; the content is the target URL.
    Link,
}

impl SubmitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitKind::SelfPost => "self",
            SubmitKind::Link => "link",
        }
    }
}

impl fmt::Display for SubmitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn submit_form(
    subreddit: &str,
    title: &str,
    content: &str,
    kind: SubmitKind,
) -> Vec<(&'static str, String)> {
    let content_key = match kind {
        SubmitKind::SelfPost => "text",
        SubmitKind::Link => "url",
    };

    vec![
        ("api_type", "json".to_string()),
        ("sr", subreddit.to_string()),
        ("kind", kind.as_str().to_string()),
        ("title", title.to_string()),
        ("resubmit", "true".to_string()),
        (content_key, content.to_string()),
    ]
}

impl Session {
    /// Submit a text (markdown) post.
    pub async fn submit_text(&self, subreddit: &str, title: &str, text: &str) -> Result<()> {
        self.submit(subreddit, title, text, SubmitKind::SelfPost).await
    }

    /// Submit a link post.
    pub async fn submit_link(&self, subreddit: &str, title: &str, url: &str) -> Result<()> {
        self.submit(subreddit, title, url, SubmitKind::Link).await
    }

    /// Submit a new post. Prefer [`Session::submit_text`] or
    /// [`Session::submit_link`].
    pub async fn submit(
        &self,
        subreddit: &str,
        title: &str,
        content: &str,
        kind: SubmitKind,
    ) -> Result<()> {
        info!("Submitting {} post to r/{}: '{}'", kind, subreddit, title);

        let form = submit_form(subreddit, title, content, kind);
        let json = self.call(Method::POST, "/api/submit", &form).await?;

        if let Some(url) = json["json"]["data"]["url"].as_str() {
            debug!("Post created at {}", url);
        }

        Ok(())
    }

    /// List links of a subreddit in the given sort order (`hot`, `new`,
    /// `top`, `controversial`, `rising`).
    pub async fn list_links(
        &self,
        subreddit: &str,
        sort: &str,
        options: &ListingOptions,
    ) -> Result<LinkList> {
        let path = format!("/r/{}/{}", subreddit, sort);
        let json = self.call(Method::GET, &path, &options.to_params()).await?;

        let page: Thing<Listing<Link>> = serde_json::from_value(json)?;
        let list = LinkList::from(page.data);
        debug!(
            "Fetched {} links from r/{} (after: {:?})",
            list.links.len(),
            subreddit,
            list.after
        );

        Ok(list)
    }

    /// Hide a link from the account's listings.
    pub async fn hide(&self, fullname: &str) -> Result<()> {
        self.act_on_thing(fullname, "/api/hide").await
    }

    /// Undo [`Session::hide`].
    pub async fn unhide(&self, fullname: &str) -> Result<()> {
        self.act_on_thing(fullname, "/api/unhide").await
    }

    async fn act_on_thing(&self, fullname: &str, path: &str) -> Result<()> {
        info!("POST {} for {}", path, fullname);
        self.call(Method::POST, path, &[("id", fullname)]).await?;
        Ok(())
    }
}

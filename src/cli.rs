use clap::{Parser, ValueEnum};
use redkit::VoteDirection;

#[derive(Parser, Debug)]
#[command(
    name = "redkit",
    version,
    about = "Command line client for the Reddit API.",
    long_about = "Command line client for the Reddit API.\n\n\
        Credentials are read from REDDIT_USERNAME, REDDIT_PASSWORD, REDDIT_CLIENT_ID and \
        REDDIT_CLIENT_SECRET (a .env file is honoured). Your app must be registered as a \
        \"script\" type app."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List links of a subreddit.
    Links {
        /// The name of the subreddit to list.
        #[arg(help = "Subreddit name", required = true)]
        subreddit: String,

        /// Sort order: hot, new, top, controversial or rising.
        #[arg(long, short, default_value = "hot")]
        sort: String,

        #[command(flatten)]
        page: PageArgs,

        /// Display links in a brief, one-line format.
        #[arg(long, short)]
        brief: bool,
    },

    /// List comments of a link, or of the whole subreddit.
    Comments {
        /// The name of the subreddit.
        #[arg(help = "Subreddit name", required = true)]
        subreddit: String,

        /// Id of the link (without the t3_ prefix).
        #[arg(help = "Link id (optional)", required = false)]
        link_id: Option<String>,

        /// Maximum depth of the reply tree.
        #[arg(long)]
        depth: Option<u32>,

        /// Comment sort: confidence, top, new, controversial, old, qa.
        #[arg(long)]
        sort: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Reply to a link or a comment.
    Comment {
        /// Fullname of the parent ("t3_" + id for links, "t1_" + id for comments).
        #[arg(help = "Parent fullname", required = true)]
        parent: String,

        /// Text content of the comment.
        #[arg(help = "Comment text", required = true)]
        text: String,
    },

    /// Vote on a link or a comment.
    Vote {
        /// Fullname of the link or comment.
        #[arg(help = "Fullname", required = true)]
        fullname: String,

        #[arg(value_enum, help = "Vote direction", required = true)]
        direction: VoteArg,
    },

    /// Submit a text post.
    SubmitText {
        #[arg(help = "Subreddit name", required = true)]
        subreddit: String,

        #[arg(help = "Post title", required = true)]
        title: String,

        #[arg(help = "Post text content", required = true)]
        text: String,
    },

    /// Submit a link post.
    SubmitLink {
        #[arg(help = "Subreddit name", required = true)]
        subreddit: String,

        #[arg(help = "Post title", required = true)]
        title: String,

        #[arg(help = "URL to submit", required = true)]
        url: String,
    },

    /// Hide a link.
    Hide {
        #[arg(help = "Link fullname", required = true)]
        fullname: String,
    },

    /// Unhide a link.
    Unhide {
        #[arg(help = "Link fullname", required = true)]
        fullname: String,
    },

    /// Show a user's public profile.
    User {
        #[arg(help = "Username", required = true)]
        username: String,
    },

    /// Show the logged-in account.
    Me,
}

/// Paging flags shared by the listing commands.
#[derive(clap::Args, Debug)]
pub struct PageArgs {
    /// Number of items to retrieve.
    #[arg(long, short)]
    pub limit: Option<u32>,

    /// Cursor of the page to continue after.
    #[arg(long)]
    pub after: Option<String>,

    /// Cursor of the page to continue before.
    #[arg(long)]
    pub before: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum VoteArg {
    Up,
    Down,
    Clear,
}

impl From<VoteArg> for VoteDirection {
    fn from(arg: VoteArg) -> Self {
        match arg {
            VoteArg::Up => VoteDirection::Up,
            VoteArg::Down => VoteDirection::Down,
            VoteArg::Clear => VoteDirection::Clear,
        }
    }
}

mod cli;

use clap::Parser;
use cli::{Cli, Commands, PageArgs};
use log::{error, info};
use redkit::config::AppConfig;
use redkit::{Comment, ListingOptions, Reply, Session};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = AppConfig::load();

    let session = match config.create_session().await {
        Ok(session) => session,
        Err(err) => {
            error!("Failed to authenticate with Reddit API: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!("Authenticated as u/{}", session.username());

    match run(&session, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(session: &Session, command: Commands) -> redkit::Result<()> {
    match command {
        Commands::Links {
            subreddit,
            sort,
            page,
            brief,
        } => {
            let options = listing_options(&page);
            let list = session.list_links(&subreddit, &sort, &options).await?;
            for link in &list.links {
                if brief {
                    println!("{}", link.format_short_summary());
                } else {
                    println!("{}\n", link.format_summary());
                }
            }
            print_cursors(list.before.as_deref(), list.after.as_deref());
        }
        Commands::Comments {
            subreddit,
            link_id,
            depth,
            sort,
            page,
        } => {
            let mut options = listing_options(&page);
            options.depth = depth.unwrap_or_default();
            options.sort = sort.unwrap_or_default();

            let reply = session
                .list_comments(&subreddit, link_id.as_deref(), &options)
                .await?;
            print_reply(&reply, 0);
            print_cursors(reply.before.as_deref(), reply.after.as_deref());
        }
        Commands::Comment { parent, text } => {
            session.comment(&parent, &text).await?;
            println!("Comment posted on {}", parent);
        }
        Commands::Vote {
            fullname,
            direction,
        } => {
            session.vote(&fullname, direction.into()).await?;
            println!("Vote recorded on {}", fullname);
        }
        Commands::SubmitText {
            subreddit,
            title,
            text,
        } => {
            session.submit_text(&subreddit, &title, &text).await?;
            println!("Text post submitted to r/{}", subreddit);
        }
        Commands::SubmitLink {
            subreddit,
            title,
            url,
        } => {
            session.submit_link(&subreddit, &title, &url).await?;
            println!("Link submitted to r/{}", subreddit);
        }
        Commands::Hide { fullname } => {
            session.hide(&fullname).await?;
            println!("Hidden {}", fullname);
        }
        Commands::Unhide { fullname } => {
            session.unhide(&fullname).await?;
            println!("Unhidden {}", fullname);
        }
        Commands::User { username } => {
            let user = session.user(&username).await?;
            println!(
                "u/{} (id {})\nLink karma: {}\nComment karma: {}\nMod: {} | Gold: {} | Verified: {}",
                user.name,
                user.id,
                user.link_karma,
                user.comment_karma,
                user.is_mod,
                user.is_gold,
                user.has_verified_email
            );
        }
        Commands::Me => {
            let me = session.me().await?;
            println!(
                "u/{} (id {})\nKarma: {}\nOver 18: {} | Suspended: {} | Employee: {}",
                me.name,
                me.id,
                me.total_karma(),
                me.over_18,
                me.is_suspended,
                me.is_employee
            );
        }
    }

    Ok(())
}

fn listing_options(page: &PageArgs) -> ListingOptions {
    ListingOptions {
        limit: page.limit.unwrap_or_default(),
        before: page.before.clone().unwrap_or_default(),
        after: page.after.clone().unwrap_or_default(),
        ..Default::default()
    }
}

fn print_reply(reply: &Reply, depth: usize) {
    for comment in &reply.comments {
        print_comment(comment, depth);
        print_reply(&comment.replies, depth + 1);
    }
}

fn print_comment(comment: &Comment, depth: usize) {
    let indent = "  ".repeat(depth);
    let edited = if comment.edited.is_edited() { " (edited)" } else { "" };
    println!(
        "{}[{} pts] u/{} ({}){}",
        indent, comment.score, comment.author, comment.fullname, edited
    );
    for line in comment.body.lines() {
        println!("{}  {}", indent, line);
    }
}

fn print_cursors(before: Option<&str>, after: Option<&str>) {
    if let Some(before) = before {
        println!("before: {}", before);
    }
    if let Some(after) = after {
        println!("after: {}", after);
    }
}

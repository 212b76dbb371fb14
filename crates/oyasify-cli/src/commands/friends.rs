//! Friend list and friend request commands.

use super::Context;
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum FriendsAction {
    /// List friends
    List,
    /// Search the directory for people to add
    Search { query: String },
    /// Send a friend request
    Request { account_id: u64 },
    /// List incoming friend requests
    Requests,
    /// Accept a friend request
    Accept { account_id: u64 },
    /// Decline a friend request
    Decline { account_id: u64 },
}

pub async fn run(ctx: &Context, action: FriendsAction) -> Result<()> {
    let me = ctx.require_account().await?;

    match action {
        FriendsAction::List => {
            for friend in ctx.friends.list_friends().await? {
                let presence = if friend.online { "online" } else { "offline" };
                println!("#{:<4} {} ({presence})", friend.id, friend.name);
            }
        }
        FriendsAction::Search { query } => {
            let hits = ctx.friends.search_directory(&me, &query).await?;
            if hits.is_empty() {
                println!("no one found for '{query}'");
            }
            for account in hits {
                println!("#{:<4} {}", account.id, account.name);
            }
        }
        FriendsAction::Request { account_id } => {
            if ctx.friends.send_request(&me, account_id).await? {
                println!("friend request sent");
            } else {
                println!("request already pending");
            }
        }
        FriendsAction::Requests => {
            for request in ctx.friends.incoming_requests(me.id).await? {
                println!("#{:<4} {}", request.from_id, request.from_name);
            }
        }
        FriendsAction::Accept { account_id } => {
            let friend = ctx.friends.accept_request(&me, account_id).await?;
            println!("{} is now your friend", friend.name);
        }
        FriendsAction::Decline { account_id } => {
            ctx.friends.decline_request(&me, account_id).await?;
            println!("request declined");
        }
    }

    Ok(())
}

//! Supporter workflow commands.

use super::Context;
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum SupporterAction {
    /// File a supporter request for the logged-in account
    Request,
    /// List pending supporter requests (owner)
    Pending,
    /// Approve a pending request (owner)
    Approve { account_id: u64 },
    /// Grant or revoke supporter status directly (owner)
    Set {
        account_id: u64,
        #[arg(long)]
        revoke: bool,
    },
    /// Broadcast a notice to every account (owner)
    Broadcast { message: String },
    /// Show and consume the current broadcast notice
    Notice,
}

pub async fn run(ctx: &Context, action: SupporterAction) -> Result<()> {
    let me = ctx.require_account().await?;

    match action {
        SupporterAction::Request => {
            if ctx.supporter.request_supporter(&me).await? {
                println!("request filed; wait for the owner's approval");
            } else {
                println!("nothing to do (already a supporter or request pending)");
            }
        }
        SupporterAction::Pending => {
            for request in ctx.supporter.pending_requests(&me).await? {
                println!("#{:<4} {}", request.user_id, request.user_name);
            }
        }
        SupporterAction::Approve { account_id } => {
            ctx.supporter.approve(&me, account_id).await?;
            println!("approved");
        }
        SupporterAction::Set { account_id, revoke } => {
            ctx.supporter.set_supporter(&me, account_id, !revoke).await?;
            println!("updated");
        }
        SupporterAction::Broadcast { message } => {
            ctx.supporter.broadcast(&me, &message).await?;
            println!("notice broadcast");
        }
        SupporterAction::Notice => match ctx.supporter.take_notice().await? {
            Some(message) => println!("{message}"),
            None => println!("no unread notice"),
        },
    }

    Ok(())
}

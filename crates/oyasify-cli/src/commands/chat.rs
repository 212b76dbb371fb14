//! Friend chat commands.

use super::Context;
use anyhow::{Result, anyhow};
use clap::Subcommand;
use oyasify_core::chat::{ChatSession, Draft, Message, MessageKind, Sender};

#[derive(Subcommand)]
pub enum ChatAction {
    /// Show the conversation with a friend
    Open { friend_id: u64 },
    /// Send a text message (use @oyasifyai / "/parar" for the AI)
    Send { friend_id: u64, text: String },
}

pub async fn run(ctx: &Context, action: ChatAction) -> Result<()> {
    ctx.require_account().await?;

    match action {
        ChatAction::Open { friend_id } => {
            let session = ctx.chat_service()?.open_chat(friend_id).await?;
            print_session(ctx, &session).await?;
        }
        ChatAction::Send { friend_id, text } => {
            let session = ctx
                .chat_service()?
                .send_message(friend_id, Draft::text(text))
                .await?;
            print_session(ctx, &session).await?;
        }
    }

    Ok(())
}

async fn print_session(ctx: &Context, session: &ChatSession) -> Result<()> {
    let friend = ctx
        .friends
        .find_friend(session.friend_id)
        .await?
        .ok_or_else(|| anyhow!("unknown friend #{}", session.friend_id))?;

    println!(
        "-- chat with {}{} --",
        friend.name,
        if session.ai_active { " [AI ativa]" } else { "" }
    );
    for message in &session.messages {
        print_message(&friend.name, message);
    }
    Ok(())
}

fn print_message(friend_name: &str, message: &Message) {
    if message.kind == MessageKind::System {
        println!("   * {}", message.content.as_deref().unwrap_or_default());
        return;
    }

    let who = match message.sender {
        Sender::Me => "you",
        Sender::Ai => "oyasify-ai",
        Sender::Friend(_) => friend_name,
    };
    let media = |label: &str| {
        format!(
            "[{label}] {}",
            message.media_url.as_deref().unwrap_or_default()
        )
    };
    let body = match message.kind {
        MessageKind::Text | MessageKind::System => message.content.clone().unwrap_or_default(),
        MessageKind::Image => media("image"),
        MessageKind::Video => media("video"),
        MessageKind::Audio => media("audio"),
    };
    if message.timestamp.is_empty() {
        println!("{who}: {body}");
    } else {
        println!("[{}] {who}: {body}", message.timestamp);
    }
}

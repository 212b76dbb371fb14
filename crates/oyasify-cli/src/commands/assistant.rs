//! One-shot assistant command.

use super::Context;
use anyhow::Result;
use oyasify_core::chat::MessageKind;
use oyasify_interaction::responder::Attachment;
use std::path::PathBuf;

pub async fn run(ctx: &Context, text: &str, images: &[PathBuf]) -> Result<()> {
    ctx.require_account().await?;

    let mut attachments = Vec::with_capacity(images.len());
    for path in images {
        attachments.push(Attachment::from_path(path).await?);
    }

    let reply = ctx.assistant_service()?.send(text, attachments).await?;
    match reply.kind {
        MessageKind::Image => {
            // Data URIs get long; point at the payload instead of dumping it.
            let uri = reply.media_url.unwrap_or_default();
            println!("[image generated, {} bytes of data URI]", uri.len());
        }
        _ => println!("{}", reply.content.unwrap_or_default()),
    }
    Ok(())
}

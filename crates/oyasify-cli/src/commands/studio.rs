//! Studio generator commands.

use super::Context;
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum StudioAction {
    /// Generate a video script (supporter perk)
    Script { idea: String },
    /// Generate song lyrics
    Lyrics {
        idea: String,
        /// Optional style, e.g. "Remix"
        #[arg(long)]
        style: Option<String>,
    },
}

pub async fn run(ctx: &Context, action: StudioAction) -> Result<()> {
    let me = ctx.require_account().await?;
    let studio = ctx.studio_service()?;

    match action {
        StudioAction::Script { idea } => {
            let script = studio.generate_script(&me, &idea).await?;
            println!("{script}");
        }
        StudioAction::Lyrics { idea, style } => {
            let lyrics = studio.generate_lyrics(&idea, style.as_deref()).await?;
            println!("{lyrics}");
        }
    }

    Ok(())
}

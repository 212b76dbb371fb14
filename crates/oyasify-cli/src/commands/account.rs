//! Account commands: seed, register, login, logout, whoami.

use super::Context;
use anyhow::Result;
use oyasify_core::user::AccountRepository;

pub async fn seed(ctx: &Context) -> Result<()> {
    oyasify_infrastructure::seed::install_if_needed(&ctx.store).await?;
    let count = ctx.accounts().list_all().await?.len();
    println!("store ready ({count} accounts in the directory)");
    Ok(())
}

pub async fn register(ctx: &Context, name: &str, email: &str, password: &str) -> Result<()> {
    let account = ctx.auth.register(name, email, password).await?;
    println!("welcome, {} (account #{})", account.name, account.id);
    Ok(())
}

pub async fn login(ctx: &Context, email: &str, password: &str) -> Result<()> {
    let account = ctx.auth.login(email, password).await?;
    println!("logged in as {} (account #{})", account.name, account.id);
    Ok(())
}

pub async fn logout(ctx: &Context) -> Result<()> {
    ctx.auth.logout().await?;
    println!("logged out");
    Ok(())
}

pub async fn whoami(ctx: &Context) -> Result<()> {
    match ctx.auth.current_account().await? {
        Some(account) => {
            let badge = if account.supporter { " ⭐" } else { "" };
            println!("{} <{}>{badge}", account.name, account.email);
            println!("  bio:   {}", account.bio);
            println!("  theme: {}", account.theme);
        }
        None => println!("not logged in"),
    }
    Ok(())
}

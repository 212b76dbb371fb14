//! Initial data installation.
//!
//! Installs the same starting data the original application shipped with:
//! the owner account, a handful of discoverable users, an initial friend
//! list, and two opening conversations. Users are installed whenever the
//! directory is empty; friends and chats only on the very first run
//! (tracked by the `seeded` marker in app state).

use crate::local_store::{LocalStore, keys};
use oyasify_core::chat::{ChatSession, Message, MessageKind, Sender};
use oyasify_core::error::{OyasifyError, Result};
use oyasify_core::friend::Friend;
use oyasify_core::state::AppState;
use oyasify_core::user::{Account, Role, StoredAccount};
use tracing::info;

/// Installs seed data into the store where it is missing.
pub async fn install_if_needed(store: &LocalStore) -> Result<()> {
    let store = store.clone();
    tokio::task::spawn_blocking(move || install_blocking(&store))
        .await
        .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))?
}

fn install_blocking(store: &LocalStore) -> Result<()> {
    let users: Vec<StoredAccount> = store.get_or(keys::USERS, Vec::new());
    if users.is_empty() {
        info!(target: "seed", "installing initial user directory");
        store
            .set(keys::USERS, &initial_users())
            .map_err(|e| OyasifyError::data_access(format!("Failed to seed users: {e}")))?;
    }

    let mut state: AppState = store.get_or(keys::APP_STATE, AppState::default());
    if !state.seeded {
        info!(target: "seed", "installing initial friends and chats");
        store
            .set(keys::FRIENDS, &initial_friends())
            .map_err(|e| OyasifyError::data_access(format!("Failed to seed friends: {e}")))?;
        store
            .set(keys::CHATS, &initial_chats())
            .map_err(|e| OyasifyError::data_access(format!("Failed to seed chats: {e}")))?;
        state.seeded = true;
        store
            .set(keys::APP_STATE, &state)
            .map_err(|e| OyasifyError::data_access(format!("Failed to mark seeded: {e}")))?;
    }

    Ok(())
}

fn stored(
    id: u64,
    name: &str,
    email: &str,
    password: &str,
    avatar_tag: &str,
    bio: &str,
    role: Role,
    theme: &str,
    supporter: bool,
) -> StoredAccount {
    StoredAccount {
        account: Account {
            id,
            name: name.to_string(),
            email: email.to_string(),
            avatar_url: format!("https://i.pravatar.cc/150?u={avatar_tag}"),
            bio: bio.to_string(),
            role,
            theme: theme.to_string(),
            supporter,
        },
        password: password.to_string(),
    }
}

fn initial_users() -> Vec<StoredAccount> {
    vec![
        stored(
            0,
            "Oyasu",
            "pojaum1@gmail.com",
            "169738161",
            "pojaum1@gmail.com",
            "Criador do Oyasify.",
            Role::Owner,
            "sintonia",
            true,
        ),
        stored(
            101,
            "Casey",
            "casey@example.com",
            "password",
            "casey",
            "Exploring new sounds.",
            Role::User,
            "vinil",
            false,
        ),
        stored(
            102,
            "Riley",
            "riley@example.com",
            "password",
            "riley",
            "Just here to vibe.",
            Role::User,
            "neon",
            true,
        ),
        stored(
            103,
            "Jess",
            "jess@example.com",
            "password",
            "jess",
            "Producer and vocalist.",
            Role::User,
            "acustico",
            false,
        ),
        stored(
            104,
            "Quinn",
            "quinn@example.com",
            "password",
            "quinn",
            "Singer-songwriter.",
            Role::User,
            "rosa",
            false,
        ),
        stored(
            105,
            "Morgan",
            "morgan@example.com",
            "password",
            "morgan",
            "DJ and music lover.",
            Role::User,
            "rubi",
            false,
        ),
    ]
}

fn initial_friends() -> Vec<Friend> {
    let entries = [
        (1, "Alex", "a042581f4e29026704e", true),
        (2, "Samira", "a042581f4e29026704f", false),
        (3, "Jordan", "a042581f4e29026704g", true),
        (4, "Mika", "a042581f4e29026704h", true),
        (5, "Leo", "a042581f4e29026704i", false),
    ];
    entries
        .into_iter()
        .map(|(id, name, tag, online)| Friend {
            id,
            name: name.to_string(),
            avatar_url: format!("https://i.pravatar.cc/150?u={tag}"),
            online,
        })
        .collect()
}

fn text_message(id: u64, content: &str, sender: Sender, timestamp: &str) -> Message {
    Message {
        id,
        kind: MessageKind::Text,
        content: Some(content.to_string()),
        media_url: None,
        sender,
        timestamp: timestamp.to_string(),
    }
}

fn initial_chats() -> Vec<ChatSession> {
    vec![
        ChatSession::from_messages(
            1,
            vec![
                text_message(1, "E aí, tudo certo?", Sender::Friend(1), "10:00"),
                text_message(2, "Tudo ótimo! E com você?", Sender::Me, "10:01"),
                text_message(
                    3,
                    "Melhor agora! Viu o vídeo novo que postei?",
                    Sender::Friend(1),
                    "10:02",
                ),
            ],
        ),
        ChatSession::from_messages(
            3,
            vec![text_message(1, "Bora fazer uma collab?", Sender::Friend(3), "Ontem")],
        ),
    ]
}

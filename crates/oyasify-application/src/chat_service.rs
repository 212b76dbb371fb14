//! Friend-chat service.
//!
//! Drives the chat turn engine around the AI responder and the chat store.
//! Transitions for one friend are strictly serialized: the per-friend lock
//! is held across the awaited AI call, so a message sent while a call is in
//! flight queues behind it and appends after the in-flight turn's result.
//! Chats with different friends proceed independently.

use oyasify_core::chat::{
    AI_APOLOGY, ChatRepository, ChatSession, Draft, TurnPlan, begin_turn, complete_turn,
};
use oyasify_core::error::Result;
use oyasify_interaction::Responder;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

pub struct ChatService {
    chats: Arc<dyn ChatRepository>,
    responder: Arc<dyn Responder>,
    /// One lock per friend, created on first use.
    locks: Mutex<HashMap<u64, Arc<Mutex<()>>>>,
}

impl ChatService {
    pub fn new(chats: Arc<dyn ChatRepository>, responder: Arc<dyn Responder>) -> Self {
        Self {
            chats,
            responder,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the session for a friend, creating an empty one on first
    /// open (not persisted until the first message).
    pub async fn open_chat(&self, friend_id: u64) -> Result<ChatSession> {
        Ok(self
            .chats
            .find_by_friend(friend_id)
            .await?
            .unwrap_or_else(|| ChatSession::new(friend_id)))
    }

    /// Sends a message to a friend's chat and runs the full turn, including
    /// the AI reply when the turn engine asks for one.
    ///
    /// The dispatched AI call always resolves: a responder failure degrades
    /// to the fixed apology reply and the session still advances. Store
    /// writes are best-effort (last-writer-wins): a failed save is logged
    /// and the in-memory session is still returned.
    pub async fn send_message(&self, friend_id: u64, draft: Draft) -> Result<ChatSession> {
        let lock = self.lock_for(friend_id).await;
        let _guard = lock.lock().await;

        let mut session = self.open_chat(friend_id).await?;
        let plan = begin_turn(&mut session, draft)?;

        if let TurnPlan::QueryAi { prompt } = plan {
            // Image attachments are not forwarded from friend chats.
            let reply = match self.responder.generate_text(&prompt, &[]).await {
                Ok(text) => text,
                Err(err) => {
                    warn!(target: "chat", friend_id, %err, "AI responder failed, using apology");
                    AI_APOLOGY.to_string()
                }
            };
            complete_turn(&mut session, reply);
        }

        if let Err(err) = self.chats.save(&session).await {
            warn!(target: "chat", friend_id, %err, "failed to persist chat session");
        }
        Ok(session)
    }

    async fn lock_for(&self, friend_id: u64) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(friend_id).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockChatRepository, MockResponder};
    use oyasify_core::chat::{AI_JOINED_NOTICE, MessageKind, Sender};
    use oyasify_core::error::OyasifyError;
    use oyasify_interaction::ResponderError;
    use std::time::Duration;

    fn service(replies: Vec<std::result::Result<String, ResponderError>>) -> ChatService {
        ChatService::new(
            Arc::new(MockChatRepository::new()),
            Arc::new(MockResponder::with_text_replies(replies)),
        )
    }

    #[tokio::test]
    async fn plain_message_is_persisted_without_ai() {
        let service = service(vec![]);
        let session = service.send_message(1, Draft::text("oi")).await.unwrap();

        assert_eq!(session.len(), 1);
        assert!(!session.ai_active);

        let stored = service.open_chat(1).await.unwrap();
        assert_eq!(stored, session);
    }

    #[tokio::test]
    async fn mention_runs_the_full_turn() {
        let service = service(vec![Ok("Tóquio.".to_string())]);
        let session = service
            .send_message(1, Draft::text("@oyasifyai capital do Japão?"))
            .await
            .unwrap();

        assert!(session.ai_active);
        assert_eq!(session.len(), 3);
        assert_eq!(session.messages[1].content.as_deref(), Some(AI_JOINED_NOTICE));
        assert_eq!(session.messages[2].sender, Sender::Ai);
        assert_eq!(session.messages[2].content.as_deref(), Some("Tóquio."));
    }

    #[tokio::test]
    async fn responder_failure_degrades_to_apology() {
        let service = service(vec![Err(ResponderError::Transport {
            message: "connection refused".to_string(),
            is_retryable: true,
        })]);
        let session = service
            .send_message(1, Draft::text("@oyasifyai oi"))
            .await
            .unwrap();

        // Exactly one AI message appended, flag still set.
        assert!(session.ai_active);
        assert_eq!(session.last_message().unwrap().content.as_deref(), Some(AI_APOLOGY));
        assert_eq!(
            session
                .messages
                .iter()
                .filter(|m| m.sender == Sender::Ai && m.kind == MessageKind::Text)
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn failed_save_is_swallowed_and_the_session_still_advances() {
        struct UnwritableChatRepository;

        #[async_trait::async_trait]
        impl ChatRepository for UnwritableChatRepository {
            async fn find_by_friend(&self, _friend_id: u64) -> Result<Option<ChatSession>> {
                Ok(None)
            }

            async fn save(&self, _session: &ChatSession) -> Result<()> {
                Err(OyasifyError::data_access("disk full"))
            }

            async fn list_all(&self) -> Result<Vec<ChatSession>> {
                Ok(Vec::new())
            }
        }

        let service = ChatService::new(
            Arc::new(UnwritableChatRepository),
            Arc::new(MockResponder::new()),
        );
        let session = service.send_message(1, Draft::text("oi")).await.unwrap();
        assert_eq!(session.len(), 1);
    }

    #[tokio::test]
    async fn empty_draft_is_rejected_and_nothing_is_stored() {
        let service = service(vec![]);
        let err = service.send_message(1, Draft::text("  ")).await.unwrap_err();
        assert!(matches!(err, OyasifyError::EmptyMessage));
        assert!(service.chats.find_by_friend(1).await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn sends_to_the_same_friend_are_serialized() {
        let responder = MockResponder::with_text_replies(vec![
            Ok("resposta 1".to_string()),
            Ok("resposta 2".to_string()),
        ])
        .delayed(Duration::from_millis(100));
        let service = Arc::new(ChatService::new(
            Arc::new(MockChatRepository::new()),
            Arc::new(responder),
        ));

        let first = {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .send_message(1, Draft::text("@oyasifyai primeira"))
                    .await
                    .unwrap()
            })
        };
        let second = {
            let service = service.clone();
            tokio::spawn(async move {
                // Dispatch strictly after the first send has the lock.
                tokio::time::sleep(Duration::from_millis(10)).await;
                service
                    .send_message(1, Draft::text("segunda"))
                    .await
                    .unwrap()
            })
        };

        first.await.unwrap();
        let session = second.await.unwrap();

        let contents: Vec<&str> = session
            .messages
            .iter()
            .map(|m| m.content.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(
            contents,
            vec![
                "@oyasifyai primeira",
                AI_JOINED_NOTICE,
                "resposta 1",
                "segunda",
                "resposta 2",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn different_friends_are_independent() {
        let responder = MockResponder::with_text_replies(vec![Ok("lenta".to_string())])
            .delayed(Duration::from_millis(100));
        let service = Arc::new(ChatService::new(
            Arc::new(MockChatRepository::new()),
            Arc::new(responder),
        ));

        let slow = {
            let service = service.clone();
            tokio::spawn(
                async move { service.send_message(1, Draft::text("@oyasifyai oi")).await },
            )
        };
        // A plain message to another friend completes without waiting for
        // friend 1's in-flight AI call.
        let other = service.send_message(2, Draft::text("oi")).await.unwrap();
        assert_eq!(other.len(), 1);

        slow.await.unwrap().unwrap();
    }
}

use tracing::{debug, info};

use super::AuctionFlowService;
use crate::domain::actors::{ActorRef, RoomRef};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::platform::{FormValues, InteractionTrigger, OutboundMessage};
use crate::services::forms::{self, QUESTION_FIELD};
use crate::services::notices;

impl AuctionFlowService {
    /// help: opens the question form.
    pub(super) async fn help(
        &self,
        trigger: &InteractionTrigger,
        room: &RoomRef,
        actor: &ActorRef,
    ) -> Result<(), AppError> {
        let form = forms::help_form(room)?;
        self.platform.forms.open_form(form, trigger, actor).await?;
        Ok(())
    }

    /// send-question: relays the question to the configured questions room.
    ///
    /// A questions room that does not exist is reported to the asker and
    /// then returned as an error: the stored configuration is inconsistent.
    pub(super) async fn send_question(
        &self,
        values: &FormValues,
        room: &RoomRef,
        actor: &ActorRef,
    ) -> Result<(), AppError> {
        let raw = values.text(QUESTION_FIELD).unwrap_or_default();
        let question = raw.trim();
        if question.is_empty() {
            return Err(
                DomainError::validation(ValidationKind::EmptyQuestion, notices::EMPTY_QUESTION)
                    .into(),
            );
        }

        let state = self.store.load(room).await?;
        let target_name = state.questions_room_name();
        let Some(target) = self.platform.directory.room_by_name(target_name).await? else {
            self.notify(notices::QUESTION_FAILED, room, actor).await?;
            return Err(DomainError::not_found(
                NotFoundKind::QuestionsRoom,
                format!("Could not find questions room with name {target_name}"),
            )
            .into());
        };

        debug!(room_id = %room.id, questions_room = %target.slug, "Relaying question");
        self.platform
            .messenger
            .send_message(
                OutboundMessage::text(notices::question_relay(&actor.username, question, &room.slug)),
                &target,
            )
            .await?;
        self.notify(&notices::question_sent(question), room, actor)
            .await?;
        info!(room_id = %room.id, actor_id = %actor.id, "Question relayed");
        Ok(())
    }
}

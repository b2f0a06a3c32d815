//! Recording fakes for the platform collaborators.

use std::sync::Mutex;

use async_trait::async_trait;
use auction::domain::{ActorId, ActorRef, RoomId, RoomRef};
use auction::platform::{
    Directory, FormRenderer, FormSpec, InteractionTrigger, Messenger, OutboundMessage,
    PlatformError, ViewHandle,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub room_id: RoomId,
    pub actor_id: ActorId,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct RecordingMessenger {
    room_messages: Mutex<Vec<(RoomId, OutboundMessage)>>,
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingMessenger {
    pub fn room_messages(&self) -> Vec<(RoomId, OutboundMessage)> {
        self.room_messages.lock().unwrap().clone()
    }

    pub fn messages_in(&self, room_id: &str) -> Vec<OutboundMessage> {
        self.room_messages()
            .into_iter()
            .filter(|(id, _)| id.as_str() == room_id)
            .map(|(_, msg)| msg)
            .collect()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn notifications_for(&self, actor_id: &str) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| n.actor_id.as_str() == actor_id)
            .map(|n| n.text)
            .collect()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(
        &self,
        message: OutboundMessage,
        room: &RoomRef,
    ) -> Result<(), PlatformError> {
        self.room_messages
            .lock()
            .unwrap()
            .push((room.id.clone(), message));
        Ok(())
    }

    async fn send_private_notification(
        &self,
        text: &str,
        room: &RoomRef,
        actor: &ActorRef,
    ) -> Result<(), PlatformError> {
        self.notifications.lock().unwrap().push(Notification {
            room_id: room.id.clone(),
            actor_id: actor.id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct OpenedForm {
    pub form: FormSpec,
    pub trigger: InteractionTrigger,
    pub actor_id: ActorId,
}

#[derive(Debug, Default)]
pub struct RecordingForms {
    opened: Mutex<Vec<OpenedForm>>,
}

impl RecordingForms {
    pub fn opened(&self) -> Vec<OpenedForm> {
        self.opened.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<FormSpec> {
        self.opened.lock().unwrap().last().map(|o| o.form.clone())
    }

    pub fn count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }
}

#[async_trait]
impl FormRenderer for RecordingForms {
    async fn open_form(
        &self,
        form: FormSpec,
        trigger: &InteractionTrigger,
        actor: &ActorRef,
    ) -> Result<ViewHandle, PlatformError> {
        let handle = ViewHandle(form.view_id.clone());
        self.opened.lock().unwrap().push(OpenedForm {
            form,
            trigger: trigger.clone(),
            actor_id: actor.id.clone(),
        });
        Ok(handle)
    }
}

/// Rooms known to the platform; names are matched against slugs.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    rooms: Mutex<Vec<RoomRef>>,
}

impl StaticDirectory {
    pub fn new(rooms: Vec<RoomRef>) -> Self {
        Self {
            rooms: Mutex::new(rooms),
        }
    }

    pub fn remove(&self, room_id: &str) {
        self.rooms
            .lock()
            .unwrap()
            .retain(|room| room.id.as_str() != room_id);
    }
}

#[async_trait]
impl Directory for StaticDirectory {
    async fn room_by_name(&self, name: &str) -> Result<Option<RoomRef>, PlatformError> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .find(|room| room.slug == name)
            .cloned())
    }

    async fn room_by_id(&self, id: &RoomId) -> Result<Option<RoomRef>, PlatformError> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .find(|room| &room.id == id)
            .cloned())
    }
}

//! Shared actors, rooms and a wired-up controller for workflow tests.

use std::sync::Arc;

use auction::config::roles::RoleTable;
use auction::domain::{ActorRef, AuctionState, AuctionType, Role, RoomRef};
use auction::platform::{FormSpec, FormValues, InteractionTrigger, Platform};
use auction::repos::{AuctionStateRepo, InMemoryAuctionStateRepo};
use auction::services::forms::{QUESTIONS_ROOM_FIELD, STATUS_FIELD, TYPE_FIELD};
use auction::{AppError, AppState, AuctionFlowService};
use serde_json::json;

use super::platform::{RecordingForms, RecordingMessenger, StaticDirectory};

pub const AUCTION_ROOM_ID: &str = "r-sale";
pub const QUESTIONS_ROOM_ID: &str = "r-questions";
pub const OTHER_ROOM_ID: &str = "r-other";

pub fn sale_room() -> RoomRef {
    RoomRef::new(AUCTION_ROOM_ID, "sale")
}

pub fn questions_room() -> RoomRef {
    RoomRef::new(QUESTIONS_ROOM_ID, "questions_sale")
}

pub fn other_room() -> RoomRef {
    RoomRef::new(OTHER_ROOM_ID, "other")
}

pub fn auctioneer() -> ActorRef {
    ActorRef::new("u-auctioneer", "leiloeiro")
}

pub fn admin() -> ActorRef {
    ActorRef::new("u-admin", "root").with_capability("admin")
}

pub fn alice() -> ActorRef {
    ActorRef::new("u-alice", "alice")
}

pub fn bob() -> ActorRef {
    ActorRef::new("u-bob", "bob")
}

/// Nobody put this actor in any role table.
pub fn stranger() -> ActorRef {
    ActorRef::new("u-stranger", "stranger")
}

pub fn trigger() -> InteractionTrigger {
    InteractionTrigger::new("trigger-1")
}

pub fn roles() -> RoleTable {
    RoleTable::builder()
        .member(Role::Auctioneer, "u-auctioneer")
        .member(Role::Competitor, "u-alice")
        .member(Role::Competitor, "u-bob")
        .build()
}

pub struct Harness {
    pub flow: AuctionFlowService,
    pub state: AppState,
    pub platform: Platform,
    pub store: Arc<dyn AuctionStateRepo>,
    pub messenger: Arc<RecordingMessenger>,
    pub forms: Arc<RecordingForms>,
    pub directory: Arc<StaticDirectory>,
}

pub fn harness() -> Harness {
    harness_with_store(Arc::new(InMemoryAuctionStateRepo::new()))
}

pub fn harness_with_store(store: Arc<dyn AuctionStateRepo>) -> Harness {
    let messenger = Arc::new(RecordingMessenger::default());
    let forms = Arc::new(RecordingForms::default());
    let directory = Arc::new(StaticDirectory::new(vec![
        sale_room(),
        questions_room(),
        other_room(),
    ]));
    let platform = Platform::new(messenger.clone(), forms.clone(), directory.clone());
    let state = AppState::new(store.clone(), roles());
    Harness {
        flow: AuctionFlowService::new(&state, platform.clone()),
        state,
        platform,
        store,
        messenger,
        forms,
        directory,
    }
}

impl Harness {
    /// Another controller over the same shared state, the way a host builds
    /// one per inbound event.
    pub fn controller(&self) -> AuctionFlowService {
        AuctionFlowService::new(&self.state, self.platform.clone())
    }

    pub async fn state_of(&self, room: &RoomRef) -> AuctionState {
        self.store.load(room).await.unwrap()
    }

    /// Submit `form` as `actor` with `values`.
    pub async fn submit(
        &self,
        form: &FormSpec,
        values: FormValues,
        actor: &ActorRef,
    ) -> Result<bool, AppError> {
        self.flow
            .process_form_submit(&form.submit_token, &values, &trigger(), actor)
            .await
    }

    pub async fn click(&self, action: &str, actor: &ActorRef) -> Result<bool, AppError> {
        self.flow
            .process_button_click(action, &trigger(), &sale_room(), actor)
            .await
    }

    /// Open the configuration form as the auctioneer and submit it.
    pub async fn configure(&self, status: &str, auction_type: AuctionType) {
        self.flow
            .process_command(&auctioneer(), &sale_room(), Some(&trigger()))
            .await
            .unwrap();
        let form = self.forms.last().unwrap();
        let values = FormValues::new()
            .with(STATUS_FIELD, json!(status))
            .with(TYPE_FIELD, json!(auction_type.as_str()))
            .with(QUESTIONS_ROOM_FIELD, json!("questions_sale"));
        assert!(self.submit(&form, values, &auctioneer()).await.unwrap());
    }

    pub async fn running(&self, auction_type: AuctionType) {
        self.configure("running", auction_type).await;
    }

    /// start-bid, send-bid and confirm-bid for `actor`.
    pub async fn place_bid(&self, actor: &ActorRef, value: &str) {
        assert!(self.click("start-bid", actor).await.unwrap());
        let entry = self.forms.last().unwrap();
        let values = FormValues::new().with("bidValue", json!(value));
        assert!(self.submit(&entry, values, actor).await.unwrap());
        let confirm = self.forms.last().unwrap();
        assert_eq!(confirm.title, "Confirm bid");
        assert!(self.submit(&confirm, FormValues::new(), actor).await.unwrap());
    }
}

mod common;
mod support;

use auction::domain::AuctionType;
use auction::platform::FormValues;
use auction::services::forms::QUESTION_FIELD;
use auction::services::notices;
use auction::{ErrorClass, ErrorCode};
use serde_json::json;
use support::fixtures::{
    alice, harness, questions_room, AUCTION_ROOM_ID, QUESTIONS_ROOM_ID,
};

fn question(text: &str) -> FormValues {
    FormValues::new().with(QUESTION_FIELD, json!(text))
}

#[tokio::test]
async fn help_opens_the_question_form() {
    let h = harness();
    assert!(h.click("help", &alice()).await.unwrap());
    let form = h.forms.last().unwrap();
    assert_eq!(form.title, "Help");
    assert!(form.find_field(QUESTION_FIELD).is_some());
}

#[tokio::test]
async fn blank_question_is_reported_and_not_relayed() {
    let h = harness();
    h.click("help", &alice()).await.unwrap();
    let form = h.forms.last().unwrap();

    for text in ["", "   \n\t"] {
        assert!(h.submit(&form, question(text), &alice()).await.unwrap());
    }
    assert!(h.submit(&form, FormValues::new(), &alice()).await.unwrap());

    assert!(h.messenger.room_messages().is_empty());
    assert_eq!(
        h.messenger.notifications_for("u-alice"),
        vec![notices::EMPTY_QUESTION.to_string(); 3]
    );
}

#[tokio::test]
async fn question_is_relayed_once_and_confirmed_once() {
    let h = harness();
    h.click("help", &alice()).await.unwrap();
    let form = h.forms.last().unwrap();

    assert!(h
        .submit(&form, question("  Is shipping included? "), &alice())
        .await
        .unwrap());

    let relayed = h.messenger.messages_in(QUESTIONS_ROOM_ID);
    assert_eq!(relayed.len(), 1);
    assert_eq!(
        relayed[0].text,
        "user alice asked Is shipping included? in room sale"
    );
    assert!(h.messenger.messages_in(AUCTION_ROOM_ID).is_empty());

    let notes = h.messenger.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].room_id.as_str(), AUCTION_ROOM_ID);
    assert_eq!(notes[0].text, notices::question_sent("Is shipping included?"));
}

#[tokio::test]
async fn questions_follow_the_configured_room() {
    let h = harness();
    h.running(AuctionType::Forward).await;
    assert_eq!(
        h.state_of(&support::fixtures::sale_room()).await.questions_room_name(),
        questions_room().slug
    );
    h.click("help", &alice()).await.unwrap();
    let form = h.forms.last().unwrap();
    h.submit(&form, question("when?"), &alice()).await.unwrap();
    assert_eq!(h.messenger.messages_in(QUESTIONS_ROOM_ID).len(), 1);
}

#[tokio::test]
async fn missing_questions_room_notifies_then_fails() {
    let h = harness();
    h.directory.remove(QUESTIONS_ROOM_ID);
    h.click("help", &alice()).await.unwrap();
    let form = h.forms.last().unwrap();

    let err = h
        .submit(&form, question("anyone there?"), &alice())
        .await
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Lookup);
    assert_eq!(err.code(), ErrorCode::QuestionsRoomNotFound);
    assert_eq!(
        h.messenger.notifications_for("u-alice"),
        vec![notices::QUESTION_FAILED.to_string()]
    );
    assert!(h.messenger.room_messages().is_empty());
}

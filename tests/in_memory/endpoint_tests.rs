//! Endpoint adapter mapping from forms to status codes.

use super::helpers::due_date;
use crate::test_helpers::recording::{EventLog, RecordingRepository, RecordingLogger};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use taskbook::task::{
    adapters::web::{EndpointStatus, RegisterTaskForm, TaskEndpoint},
    domain::{Category, CategoryId, Task, TaskDomainError},
    error::RegistrationError,
    ports::TaskRepository,
};

fn form(category_id: i64) -> RegisterTaskForm {
    RegisterTaskForm {
        category_id,
        title: "Study Testing".to_owned(),
        due_date: due_date(),
    }
}

fn seed_study(repository: &RecordingRepository) {
    let category = Category::with_id(CategoryId::new(20).expect("valid id"), "estudo")
        .expect("valid category");
    repository
        .inner()
        .add_category(&category)
        .expect("seeding should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn known_category_yields_ok() {
    let events = EventLog::default();
    let repository = Arc::new(RecordingRepository::new(events.clone()));
    seed_study(&repository);
    let endpoint = TaskEndpoint::new(
        Arc::clone(&repository),
        Arc::new(RecordingLogger::new(events)),
        Arc::new(DefaultClock),
    );

    let status = endpoint.register_task(&form(20)).await;

    assert_eq!(status, EndpointStatus::Ok);
    assert_eq!(status.code(), 200);
    let stored = repository
        .find_tasks(&|task: &Task| task.category().name() == "estudo")
        .await
        .expect("lookup should succeed");
    assert_eq!(stored.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failing_insert_yields_server_error() {
    let events = EventLog::default();
    let repository = Arc::new(RecordingRepository::failing(events.clone(), "insert failed"));
    seed_study(&repository);
    let endpoint = TaskEndpoint::new(
        repository,
        Arc::new(RecordingLogger::new(events)),
        Arc::new(DefaultClock),
    );

    let status = endpoint.register_task(&form(20)).await;

    assert_eq!(status, EndpointStatus::InternalServerError);
    assert_eq!(status.code(), 500);
}

#[rstest]
#[case::unknown(404)]
#[case::not_an_identifier(0)]
#[tokio::test(flavor = "multi_thread")]
async fn unresolved_category_yields_server_error(#[case] category_id: i64) {
    let events = EventLog::default();
    let repository = Arc::new(RecordingRepository::new(events.clone()));
    let logger = Arc::new(RecordingLogger::new(events.clone()));
    let endpoint = TaskEndpoint::new(
        Arc::clone(&repository),
        Arc::clone(&logger),
        Arc::new(DefaultClock),
    );

    let status = endpoint.register_task(&form(category_id)).await;

    assert_eq!(status.code(), 500);
    assert!(logger.errors().iter().all(|error| matches!(
        error,
        RegistrationError::Validation(TaskDomainError::UnresolvedCategory)
    )));
    assert!(
        !events
            .snapshot()
            .iter()
            .any(|event| event == "repository:include_tasks")
    );
}

#[rstest]
fn form_deserializes_from_json() {
    let parsed: RegisterTaskForm = serde_json::from_str(
        r#"{"category_id": 20, "title": "Study Testing", "due_date": "2019-12-31"}"#,
    )
    .expect("form should deserialize");

    assert_eq!(parsed, form(20));
}

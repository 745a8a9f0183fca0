//! Then steps for task registration BDD scenarios.

use super::world::{RegistrationWorld, run_async};
use crate::test_helpers::recording::wraps_error;
use rstest_bdd_macros::then;
use taskbook::task::{domain::Task, ports::TaskRepository};

fn last_success(world: &RegistrationWorld) -> Result<bool, eyre::Report> {
    world
        .last_result
        .as_ref()
        .map(|result| result.is_success())
        .ok_or_else(|| eyre::eyre!("missing result in scenario world"))
}

#[then("the registration succeeds")]
fn registration_succeeds(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(last_success(world)?, "expected a successful registration");
    Ok(())
}

#[then("the registration fails")]
fn registration_fails(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(!last_success(world)?, "expected a failed registration");
    Ok(())
}

#[then(r#"a stored task is titled "{title}""#)]
fn stored_task_titled(world: &RegistrationWorld, title: String) -> Result<(), eyre::Report> {
    let expected = title.clone();
    let found = run_async(
        world
            .repository
            .find_tasks(&move |task: &Task| task.title() == expected),
    )
    .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;

    eyre::ensure!(
        found.len() == 1,
        "expected exactly one task titled {title}, found {}",
        found.len()
    );
    Ok(())
}

#[then(r#"the handler logged "{fragment}" at debug level"#)]
fn logged_at_debug(world: &RegistrationWorld, fragment: String) -> Result<(), eyre::Report> {
    let messages = world.logger.debug_messages();
    eyre::ensure!(
        messages.iter().any(|message| message.contains(&fragment)),
        "no debug entry contains {fragment:?}: {messages:?}"
    );
    Ok(())
}

#[then("exactly one error entry carries the repository error")]
fn one_error_with_repository_error(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let expected = world
        .repository
        .failure()
        .ok_or_else(|| eyre::eyre!("repository in scenario world does not fail"))?;
    let errors = world.logger.errors();

    eyre::ensure!(errors.len() == 1, "expected one error entry, found {}", errors.len());
    eyre::ensure!(
        errors.iter().all(|error| wraps_error(error, &expected)),
        "logged error is not the repository error"
    );
    Ok(())
}

#[then("storage was never asked to include tasks")]
fn storage_untouched(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let events = world.events.snapshot();
    eyre::ensure!(
        !events.iter().any(|event| event == "repository:include_tasks"),
        "unexpected insert attempt: {events:?}"
    );
    Ok(())
}

//! Then steps for batch dispatch BDD scenarios.

use super::world::{DispatchWorld, run_async};
use lira_dispatch::execution::domain::{ExecutionRequestError, ExecutionResult};
use rstest_bdd_macros::then;

fn result_at(world: &DispatchWorld, position: usize) -> Result<&ExecutionResult, eyre::Report> {
    let batch = world.batch()?;
    position
        .checked_sub(1)
        .and_then(|index| batch.get(index))
        .ok_or_else(|| eyre::eyre!("batch has no result {position}"))
}

#[then("the batch has {count:usize} results in request order")]
fn batch_in_request_order(world: &DispatchWorld, count: usize) -> Result<(), eyre::Report> {
    let batch = world.batch()?;
    if batch.len() != count {
        return Err(eyre::eyre!("expected {count} results, found {}", batch.len()));
    }
    let returned: Vec<&str> = batch.iter().map(|result| result.agent_id()).collect();
    if returned != world.requested {
        return Err(eyre::eyre!(
            "expected results for {:?}, found {returned:?}",
            world.requested
        ));
    }
    Ok(())
}

#[then("every result succeeded")]
fn every_result_succeeded(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let batch = world.batch()?;
    if batch.failed_count() != 0 {
        return Err(eyre::eyre!("expected no failures, got {batch:?}"));
    }
    for result in batch {
        let confidence = result
            .confidence()
            .ok_or_else(|| eyre::eyre!("succeeded result without confidence"))?;
        if !(0.0..=1.0).contains(&confidence.value()) {
            return Err(eyre::eyre!("confidence {} outside [0, 1]", confidence.value()));
        }
    }
    Ok(())
}

#[then(r#"result {position:usize} output is "{output}""#)]
fn result_output_is(
    world: &DispatchWorld,
    position: usize,
    output: String,
) -> Result<(), eyre::Report> {
    let result = result_at(world, position)?;
    if result.output() != Some(output.as_str()) {
        return Err(eyre::eyre!("expected output '{output}', got {result:?}"));
    }
    Ok(())
}

#[then(r#"result {position:usize} failed with "{reason}""#)]
fn result_failed_with(
    world: &DispatchWorld,
    position: usize,
    reason: String,
) -> Result<(), eyre::Report> {
    let result = result_at(world, position)?;
    let actual = result.failure_reason().map(ToString::to_string);
    if actual.as_deref() != Some(reason.as_str()) {
        return Err(eyre::eyre!("expected failure '{reason}', got {result:?}"));
    }
    Ok(())
}

#[then("the request is rejected as an empty batch")]
fn rejected_as_empty(world: &DispatchWorld) -> Result<(), eyre::Report> {
    match &world.last_batch {
        Some(Err(ExecutionRequestError::EmptyBatch)) => Ok(()),
        other => Err(eyre::eyre!("expected empty batch rejection, got {other:?}")),
    }
}

#[then(r#"agent "{id}" has {count:u64} executions"#)]
fn agent_has_executions(
    world: &DispatchWorld,
    id: String,
    count: u64,
) -> Result<(), eyre::Report> {
    let agent = run_async(world.agents.find_by_id(&id))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("agent '{id}' is not registered"))?;
    if agent.execution_count() != count {
        return Err(eyre::eyre!(
            "expected {count} executions for '{id}', found {}",
            agent.execution_count()
        ));
    }
    Ok(())
}

//! Batch fan-out over the in-memory registry.

use super::helpers::{Harness, LANGUAGE_MODEL, QUANTUM_MODEL, harness};
use lira_dispatch::config::DispatchConfig;
use lira_dispatch::execution::domain::{ExecutionRequestError, FailureReason};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_batch_is_a_validation_error(
    #[from(harness)] built: eyre::Result<Harness>,
) -> eyre::Result<()> {
    let harness = built?;
    harness.seed_catalog().await?;
    let dispatcher = harness.dispatcher(DispatchConfig::default()).await?;

    let result = dispatcher.run_batch::<&str>(&[], "foo").await;

    assert_eq!(result, Err(ExecutionRequestError::EmptyBatch));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mixed_outcomes_keep_request_order(
    #[from(harness)] built: eyre::Result<Harness>,
) -> eyre::Result<()> {
    let harness = built?;
    harness.seed_catalog().await?;
    harness.register_agent("a", LANGUAGE_MODEL).await?;
    harness.register_agent("b", LANGUAGE_MODEL).await?;
    harness.agents.deactivate("b").await?;
    let dispatcher = harness.dispatcher(DispatchConfig::default()).await?;

    let batch = dispatcher.run_batch(&["b", "ghost", "a", "a"], "foo").await?;

    let ids: Vec<&str> = batch.iter().map(|result| result.agent_id()).collect();
    assert_eq!(ids, ["b", "ghost", "a", "a"]);
    let reasons: Vec<Option<String>> = batch
        .iter()
        .map(|result| result.failure_reason().map(ToString::to_string))
        .collect();
    assert_eq!(
        reasons,
        [
            Some("agent inactive".to_owned()),
            Some("agent not found".to_owned()),
            None,
            None,
        ]
    );
    assert_eq!(harness.execution_count("a").await?, 2);
    assert_eq!(harness.execution_count("b").await?, 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrency_cap_queues_positions_instead_of_rejecting(
    #[from(harness)] built: eyre::Result<Harness>,
) -> eyre::Result<()> {
    let harness = built?;
    harness.seed_catalog().await?;
    harness.register_agent("a", LANGUAGE_MODEL).await?;
    let config = DispatchConfig::from_json(r#"{ "max_concurrency": 2 }"#)?;
    let dispatcher = harness.dispatcher(config).await?;
    let requested = vec!["a"; 5];

    let batch = dispatcher.run_batch(requested.as_slice(), "foo").await?;

    assert_eq!(batch.len(), 5);
    assert_eq!(batch.succeeded_count(), 5);
    assert_eq!(harness.execution_count("a").await?, 5);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unresolvable_ids_fail_in_place_and_keep_their_spelling(
    #[from(harness)] built: eyre::Result<Harness>,
) -> eyre::Result<()> {
    let harness = built?;
    harness.seed_catalog().await?;
    harness.register_agent("a", LANGUAGE_MODEL).await?;
    let dispatcher = harness.dispatcher(DispatchConfig::default()).await?;
    let long_id = "x".repeat(129);
    let requested = ["a", " a", "no such agent", long_id.as_str()];

    let batch = dispatcher.run_batch(&requested, "foo").await?;

    let ids: Vec<&str> = batch.iter().map(|result| result.agent_id()).collect();
    assert_eq!(ids, requested);
    assert_eq!(batch.succeeded_count(), 1);
    for result in batch.iter().skip(1) {
        assert_eq!(result.failure_reason(), Some(&FailureReason::AgentNotFound));
    }
    assert_eq!(harness.execution_count("a").await?, 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn offline_oracle_fails_only_quantum_agents(
    #[from(harness)] built: eyre::Result<Harness>,
) -> eyre::Result<()> {
    let harness = built?;
    harness.seed_catalog().await?;
    harness.register_agent("lang", LANGUAGE_MODEL).await?;
    harness.register_agent("quant", QUANTUM_MODEL).await?;
    harness.oracle.take_offline();
    let dispatcher = harness.dispatcher(DispatchConfig::default()).await?;

    let batch = dispatcher.run_batch(&["lang", "quant"], "foo").await?;

    assert_eq!(batch.get(0).map(|result| result.is_succeeded()), Some(true));
    assert_eq!(
        batch.get(1).and_then(|result| result.failure_reason()),
        Some(&FailureReason::Backend(
            "backend unavailable: quantum oracle is offline".to_owned()
        ))
    );
    assert_eq!(harness.execution_count("quant").await?, 0);
    Ok(())
}

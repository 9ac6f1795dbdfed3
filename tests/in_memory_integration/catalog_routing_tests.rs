//! Catalog-driven routing of agents to backends.

use super::helpers::{Harness, LANGUAGE_MODEL, QUANTUM_MODEL, harness};
use lira_dispatch::agent_registry::services::AgentPatch;
use lira_dispatch::config::DispatchConfig;
use lira_dispatch::execution::domain::FailureReason;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn language_and_quantum_agents_run_on_one_input(
    #[from(harness)] built: eyre::Result<Harness>,
) -> eyre::Result<()> {
    let harness = built?;
    harness.seed_catalog().await?;
    harness.register_agent("1", LANGUAGE_MODEL).await?;
    harness.register_agent("2", QUANTUM_MODEL).await?;
    let dispatcher = harness.dispatcher(DispatchConfig::default()).await?;

    let batch = dispatcher.run_batch(&["1", "2"], "foo").await?;

    assert_eq!(batch.len(), 2);
    assert_eq!(batch.succeeded_count(), 2);
    let outputs: Vec<_> = batch.iter().map(|result| result.output()).collect();
    assert_eq!(
        outputs,
        [Some("Analyzed: foo"), Some("Quantum prediction for: foo")]
    );
    assert_eq!(harness.execution_count("1").await?, 1);
    assert_eq!(harness.execution_count("2").await?, 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn agent_bound_to_an_uncatalogued_model_fails(
    #[from(harness)] built: eyre::Result<Harness>,
) -> eyre::Result<()> {
    let harness = built?;
    harness.seed_catalog().await?;
    harness.register_agent("1", "Claude").await?;
    let dispatcher = harness.dispatcher(DispatchConfig::default()).await?;

    let result = dispatcher.run_agent("1", "foo").await?;

    assert_eq!(
        result.failure_reason(),
        Some(&FailureReason::Backend(
            "no backend bound for model type 'Claude'".to_owned()
        ))
    );
    assert_eq!(harness.execution_count("1").await?, 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rebinding_an_agent_switches_its_backend(
    #[from(harness)] built: eyre::Result<Harness>,
) -> eyre::Result<()> {
    let harness = built?;
    harness.seed_catalog().await?;
    harness.register_agent("1", LANGUAGE_MODEL).await?;
    harness
        .agents
        .update(
            "1",
            AgentPatch::new().with_model_type(QUANTUM_MODEL),
        )
        .await?;
    let dispatcher = harness.dispatcher(DispatchConfig::default()).await?;

    let result = dispatcher.run_agent("1", "foo").await?;

    assert_eq!(result.output(), Some("Quantum prediction for: foo"));
    Ok(())
}

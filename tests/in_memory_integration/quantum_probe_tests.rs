//! Oracle status observed while predictions are in flight.

use std::sync::Arc;
use std::time::Duration;

use super::helpers::{Harness, QUANTUM_MODEL};
use lira_dispatch::config::{DispatchConfig, QuantumOracleConfig};
use lira_dispatch::quantum::{domain::OracleState, services::QuantumProbeService};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn probe_sees_running_batch_then_recovers() -> eyre::Result<()> {
    let harness = Harness::with_oracle(QuantumOracleConfig {
        base_latency_ms: 300,
        latency_jitter_ms: 0,
        ..QuantumOracleConfig::default()
    })?;
    harness.seed_catalog().await?;
    for id in ["q1", "q2", "q3", "q4", "q5"] {
        harness.register_agent(id, QUANTUM_MODEL).await?;
    }
    let dispatcher = harness.dispatcher(DispatchConfig::default()).await?;
    let probe = QuantumProbeService::new(Arc::clone(&harness.oracle), Arc::new(DefaultClock));

    let batch = tokio::spawn(async move {
        dispatcher
            .run_batch(&["q1", "q2", "q3", "q4", "q5"], "foo")
            .await
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    let busy = probe.probe().await;

    assert_eq!(busy.state(), OracleState::Degraded);
    assert_eq!(busy.active_jobs(), 4);
    assert_eq!(busy.queue_depth(), 5);
    assert_eq!(busy.available_units(), 0);

    let results = batch.await??;
    assert_eq!(results.succeeded_count(), 5);
    let idle = probe.probe().await;
    assert_eq!(idle.state(), OracleState::Operational);
    assert_eq!(idle.available_units(), 1024);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn offline_oracle_probes_down() -> eyre::Result<()> {
    let harness = Harness::with_oracle(QuantumOracleConfig::default())?;
    let probe = QuantumProbeService::new(Arc::clone(&harness.oracle), Arc::new(DefaultClock));

    harness.oracle.take_offline();
    let status = probe.probe().await;

    assert_eq!(status.state(), OracleState::Down);
    assert_eq!(status.queue_depth(), 0);
    Ok(())
}

#[rstest]
#[case(QuantumOracleConfig { qubits_per_job: 0, ..QuantumOracleConfig::default() })]
#[case(QuantumOracleConfig { total_qubits: 128, ..QuantumOracleConfig::default() })]
fn oracle_without_room_for_a_job_is_refused(#[case] config: QuantumOracleConfig) {
    assert!(Harness::with_oracle(config).is_err());
}

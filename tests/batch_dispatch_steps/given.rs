//! Given steps for batch dispatch BDD scenarios.

use super::world::{DispatchWorld, LANGUAGE_MODEL, QUANTUM_MODEL, build_request, millis, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a language agent "{id}""#)]
fn a_language_agent(world: &mut DispatchWorld, id: String) -> Result<(), eyre::Report> {
    run_async(world.agents.register(build_request(&id, LANGUAGE_MODEL)))
        .wrap_err("register language agent")?;
    Ok(())
}

#[given(r#"a quantum agent "{id}""#)]
fn a_quantum_agent(world: &mut DispatchWorld, id: String) -> Result<(), eyre::Report> {
    run_async(world.agents.register(build_request(&id, QUANTUM_MODEL)))
        .wrap_err("register quantum agent")?;
    Ok(())
}

#[given(r#"an inactive language agent "{id}""#)]
fn an_inactive_language_agent(world: &mut DispatchWorld, id: String) -> Result<(), eyre::Report> {
    run_async(world.agents.register(build_request(&id, LANGUAGE_MODEL)))
        .wrap_err("register language agent")?;
    run_async(world.agents.deactivate(&id)).wrap_err("deactivate agent")?;
    Ok(())
}

#[given("the quantum oracle takes {ms:u64} ms per prediction")]
fn oracle_latency(world: &mut DispatchWorld, ms: u64) {
    world.oracle_config.base_latency_ms = ms;
    world.oracle_config.latency_jitter_ms = 0;
}

#[given("a per-agent deadline of {ms:u64} ms")]
fn per_agent_deadline(world: &mut DispatchWorld, ms: u64) {
    world.dispatch_config = world.dispatch_config.clone().with_per_agent_timeout(millis(ms));
}

//! When steps for batch dispatch BDD scenarios.

use super::world::{DispatchWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"agents "{ids}" run on input "{input}""#)]
fn agents_run(world: &mut DispatchWorld, ids: String, input: String) -> Result<(), eyre::Report> {
    let requested: Vec<String> = ids.split(',').map(|id| id.trim().to_owned()).collect();
    let dispatcher = world.dispatcher()?;
    world.last_batch = Some(run_async(dispatcher.run_batch(&requested, &input)));
    world.requested = requested;
    Ok(())
}

#[when(r#"an empty batch runs on input "{input}""#)]
fn empty_batch_runs(world: &mut DispatchWorld, input: String) -> Result<(), eyre::Report> {
    let dispatcher = world.dispatcher()?;
    world.last_batch = Some(run_async(dispatcher.run_batch::<String>(&[], &input)));
    world.requested = Vec::new();
    Ok(())
}

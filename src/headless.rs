use std::time::Duration;

use crate::animation::AnimationContext;
use crate::scene::SceneSnapshot;

/// Drive `context` with synthetic timestamps one frame budget apart until it
/// has run `ticks` accepted ticks, then capture the scene.
pub fn run(context: &mut AnimationContext, ticks: u64) -> SceneSnapshot {
    let budget = context.scheduler().budget().max(Duration::from_nanos(1));
    let mut now = context.scheduler().last_accepted();

    while context.ticks() < ticks {
        now += budget;
        context.frame(now, |_| {});
    }

    log::info!("Headless run finished after {} ticks", context.ticks());
    SceneSnapshot::capture(context.carousel(), context.ticks())
}

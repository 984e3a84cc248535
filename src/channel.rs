//! Event multiplexer, render queue, and the two game-loop tasks.
//!
//! Every input listener and the frame source hold a clone of one unbounded
//! sender; the update loop is the single consumer. An unbounded FIFO gives
//! the ordering contract for free: events arrive in production order and none
//! are dropped. The render queue is a second channel carrying whole `World`
//! snapshots by value, so the two tasks never share mutable state.

use futures::StreamExt;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use rand::Rng;

use crate::input::GameEvent;
use crate::render::{self, Painter};
use crate::sim::{World, advance};

pub type EventSender = UnboundedSender<GameEvent>;
pub type EventReceiver = UnboundedReceiver<GameEvent>;
pub type SnapshotSender = UnboundedSender<World>;
pub type SnapshotReceiver = UnboundedReceiver<World>;

/// The multiplexed event channel. Clone the sender once per source.
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded()
}

/// The render queue: update task in, render task out.
pub fn render_queue() -> (SnapshotSender, SnapshotReceiver) {
    mpsc::unbounded()
}

/// The update task: fold every multiplexed event into the world.
///
/// A snapshot is pushed only on frame ticks; key events edit the world and
/// wait for the next tick to become visible. The push is fire-and-forget, so
/// a slow paint can never stall the update cadence. Each event is fully
/// applied and its snapshot enqueued before the next event is dequeued.
pub async fn run_update_loop(
    mut events: EventReceiver,
    frames: SnapshotSender,
    mut rng: impl Rng,
) {
    let mut world = World::Title;
    while let Some(event) = events.next().await {
        let scene = world.scene_name();
        world = advance(world, &event, &mut rng);
        if world.scene_name() != scene {
            log::info!("scene: {} -> {}", scene, world.scene_name());
        }
        if event == GameEvent::Tick {
            // Receiver gone means the process is tearing down; nothing to do.
            let _ = frames.unbounded_send(world.clone());
        }
    }
}

/// The render task: paint exactly once per dequeued snapshot.
///
/// No timing of its own; its cadence is whatever the update task pushes.
pub async fn run_render_loop(mut frames: SnapshotReceiver, mut painter: impl Painter) {
    while let Some(world) = frames.next().await {
        render::paint(&mut painter, &world);
    }
}

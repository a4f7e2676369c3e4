use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::sleep;
use leptos::spawn_local;

use crate::domain::animation::AnimationSequencer;
use crate::domain::complexity::{STEP_INTERVAL_MS, SamplePoint};
use crate::domain::events::{AnimationEvent, DomainEvent};
use crate::domain::logging::{LogComponent, get_logger};
use crate::log_debug;

/// Application use case - drives one animation run on the browser timer.
///
/// The repeated-delay pattern from the design notes: every step awaits a
/// one-shot sleep and reschedules itself by looping, and the whole run is
/// wrapped in `Abortable` so the caller holds a single cancellable handle
/// covering whichever delay is pending.
pub struct AnimationLoop;

impl AnimationLoop {
    /// Spawn a timer-driven run. `on_point` fires once per ~100 ms step with
    /// the freshly sampled point; `on_finished` fires with the point count
    /// when the run reaches the terminal input size (not when aborted).
    pub fn spawn(
        mut on_point: impl FnMut(SamplePoint) + 'static,
        on_finished: impl FnOnce(usize) + 'static,
    ) -> AbortHandle {
        let (handle, registration) = AbortHandle::new_pair();

        let run = async move {
            let mut sequencer = AnimationSequencer::new();
            sequencer.start();
            Self::log_event(&AnimationEvent::Started);

            let mut emitted = 0usize;
            loop {
                sleep(Duration::from_millis(STEP_INTERVAL_MS)).await;
                match sequencer.advance() {
                    Some(point) => {
                        Self::log_event(&AnimationEvent::PointAppended { n: point.n });
                        emitted += 1;
                        on_point(point);
                    }
                    None => break,
                }
            }

            Self::log_event(&AnimationEvent::Completed { point_count: emitted });
            on_finished(emitted);
        };

        spawn_local(async move {
            if Abortable::new(run, registration).await.is_err() {
                get_logger()
                    .info(LogComponent::Application("AnimationLoop"), "⏹️ Run aborted mid-flight");
            }
        });

        handle
    }

    /// Record that a prior run's output is being discarded for a fresh start.
    pub fn log_restart() {
        Self::log_event(&AnimationEvent::Restarted);
    }

    fn log_event(event: &AnimationEvent) {
        match event {
            AnimationEvent::PointAppended { n } => {
                log_debug!(LogComponent::Application("AnimationLoop"), "📈 Appended point n={}", n);
            }
            other => {
                get_logger().info(
                    LogComponent::Application("AnimationLoop"),
                    &format!("🎬 Animation event: {}", other.event_type()),
                );
            }
        }
    }
}

use crate::dispatch::Event;
use crate::error::AppError;
use crate::models::view::runtime_text;
use crate::models::SessionId;
use crate::worker::{StopToken, Worker};
use log::debug;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

/// Spawn the elapsed-time reporter for one session.
pub fn spawn(
    session: SessionId,
    started_at: Instant,
    events: Sender<Event>,
    interval: Duration,
) -> Result<Worker, AppError> {
    Worker::spawn("reporter", move |stop| {
        run(session, started_at, &events, &stop, interval);
    })
}

/// Send the formatted runtime to the dispatch thread on every tick, ticks
/// aligned to the session start. Exits on stop or when the dispatcher is gone.
pub fn run(
    session: SessionId,
    started_at: Instant,
    events: &Sender<Event>,
    stop: &StopToken,
    interval: Duration,
) {
    let mut tick: u32 = 0;

    loop {
        let text = runtime_text(started_at.elapsed());
        if events.send(Event::Elapsed { session, text }).is_err() {
            debug!("Dispatcher gone, reporter for session {session} exiting");
            break;
        }

        tick = tick.saturating_add(1);
        let next = interval
            .checked_mul(tick)
            .and_then(|offset| started_at.checked_add(offset));
        let wait = next.map_or(interval, |at| at.saturating_duration_since(Instant::now()));

        if stop.wait(wait) {
            break;
        }
    }
}

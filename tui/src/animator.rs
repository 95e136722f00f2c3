//! Frame Animator
//!
//! Drives a redraw callback at a fixed frame interval for a fixed hold, on
//! the tokio timer. The hold deadline is polled first, so a frame due at the
//! same instant as the deadline is never drawn and runs are reproducible.

use std::io;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};

use crate::surface::Surface;

/// Redraw `draw(surface, frame)` every `interval` until `hold` elapses
///
/// With no interval (motion disabled) a single static frame is drawn and
/// the hold is still honoured. Returns the number of frames drawn.
pub async fn animate<S, F>(
    surface: &mut S,
    hold: Duration,
    interval: Option<Duration>,
    mut draw: F,
) -> io::Result<u64>
where
    S: Surface + ?Sized,
    F: FnMut(&mut S, u64) -> io::Result<()>,
{
    let Some(interval) = interval else {
        draw(surface, 0)?;
        time::sleep(hold).await;
        return Ok(1);
    };

    let deadline = time::sleep(hold);
    tokio::pin!(deadline);

    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut frame = 0;
    loop {
        tokio::select! {
            biased;
            _ = &mut deadline => break,
            _ = ticker.tick() => {
                draw(surface, frame)?;
                frame += 1;
            }
        }
    }
    Ok(frame)
}

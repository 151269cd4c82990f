//! Progress indicator shown while waiting on the model

use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// A running spinner on stderr
///
/// Stopped exactly once, either by [`Spinner::stop`] or on drop.
pub struct Spinner {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start() -> Self {
        let (stop, mut stopped) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let started = Instant::now();
            let mut ticks = tokio::time::interval(FRAME_INTERVAL);
            let mut frame = 0;
            loop {
                tokio::select! {
                    _ = &mut stopped => break,
                    _ = ticks.tick() => {
                        eprint!("\r{} {}", FRAMES[frame], started.elapsed().as_secs());
                        frame = (frame + 1) % FRAMES.len();
                    }
                }
            }
            // Erase the spinner line
            eprint!("\r\x1b[2K");
        });

        Spinner {
            stop: Some(stop),
            task: Some(task),
        }
    }

    /// Stop and wait until the line is erased
    pub async fn stop(mut self) {
        self.signal();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    fn signal(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.signal();
    }
}

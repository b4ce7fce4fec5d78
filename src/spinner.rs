use std::future::Future;
use std::io::Write;
use std::time::Duration;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Busy indicator. Holds no state; callers supply the tick.
pub struct LoadingSpinner;

impl LoadingSpinner {
    pub fn frame(tick: usize) -> &'static str {
        FRAMES[tick % FRAMES.len()]
    }

    pub fn render(tick: usize, label: &str) -> String {
        format!("{} {}", Self::frame(tick), label)
    }

    /// Animate on stderr until `task` completes, then erase the line
    pub async fn spin_while<F: Future>(label: &str, task: F) -> F::Output {
        tokio::pin!(task);
        let mut ticker = tokio::time::interval(FRAME_INTERVAL);
        let mut tick = 0usize;

        loop {
            tokio::select! {
                output = &mut task => {
                    eprint!("\r\x1b[2K");
                    let _ = std::io::stderr().flush();
                    return output;
                }
                _ = ticker.tick() => {
                    eprint!("\r{}", Self::render(tick, label));
                    let _ = std::io::stderr().flush();
                    tick += 1;
                }
            }
        }
    }
}

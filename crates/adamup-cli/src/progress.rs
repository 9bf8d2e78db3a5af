//! Download progress bar.

use std::sync::{Arc, Mutex};

use adamup_http::ProgressCallback;
use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})";

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE)
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓░"))
}

/// Progress callback drawing one bar per download.
///
/// A bar is created on the first chunk and cleared once the advertised
/// length has arrived.
pub fn terminal_progress() -> ProgressCallback {
    let current: Arc<Mutex<Option<ProgressBar>>> = Arc::new(Mutex::new(None));

    Arc::new(move |downloaded: u64, total: u64| {
        let Ok(mut slot) = current.lock() else {
            return;
        };
        let bar = slot.get_or_insert_with(|| {
            let bar = ProgressBar::new(total);
            bar.set_style(bar_style());
            bar
        });
        bar.set_position(downloaded);

        if total > 0 && downloaded >= total {
            bar.finish_and_clear();
            *slot = None;
        }
    })
}

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Stand-in for the registration/creation backend: spin for a second, then
/// succeed. There is no real server behind this app.
pub async fn simulate_backend(message: &str) {
    let spinner = create_spinner(message.to_string());
    tokio::time::sleep(Duration::from_secs(1)).await;
    spinner.finish_and_clear();
}

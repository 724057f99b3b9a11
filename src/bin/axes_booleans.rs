use std::process::ExitCode;

use chart_publish::gallery;
use chart_publish::telemetry::init_default_tracing;
use tracing::error;

fn main() -> ExitCode {
    let _ = init_default_tracing();

    let result = gallery::axes_booleans()
        .and_then(|(figure, filename)| chart_publish::publish_gallery_figure(&figure, filename));
    match result {
        Ok(published) => {
            println!("{}", published.url);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "publish failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

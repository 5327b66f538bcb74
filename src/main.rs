//! incidentlog main entrypoint.

use incidentlog::run;
use incidentlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}

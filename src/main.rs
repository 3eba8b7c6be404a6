//! workhours main entrypoint.

use workhours::run;
use workhours::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}

//! cpunch main entrypoint.

use cpunch::run;
use cpunch::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        if !e.is_user_error() {
            std::process::exit(1);
        }
    }
}

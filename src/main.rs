//! lccudb main entrypoint.

use lccudb::run;
use lccudb::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        if !e.is_validation() {
            messages::info("Run `lccudb config --check` to see which database file is in use.");
        }
        std::process::exit(1);
    }
}

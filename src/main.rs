//! lithoview main entrypoint.

use lithoview::run;
use lithoview::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

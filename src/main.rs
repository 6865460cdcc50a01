//! Inspector for the forms widget themes.
//!
//! Paints one widget part into a display list and prints what was drawn.

use fwl_theme::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}

//! Binary entry point for `update-flatpak-release`.

use std::process;

fn main() {
    flatpak_bump::init_logging();
    if let Err(e) = flatpak_bump::run_release(std::env::args_os()) {
        flatpak_bump::report(&e);
        process::exit(e.exit_code());
    }
}

//! Client-side rendering entry point.

use atelier_web::app::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("failed to install console logger");

    leptos::mount::mount_to_body(App);
}

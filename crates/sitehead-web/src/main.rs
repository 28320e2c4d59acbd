//! WASM entry point for the sitehead demo page

use leptos::mount::mount_to_body;
use sitehead_web::App;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

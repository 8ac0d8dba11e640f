//! Entry point: binds the form handlers once the page's script loads.

use score_form::{config::LOG_LEVEL, dom, logging};

fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    logging::init(LOG_LEVEL);

    if let Err(e) = dom::start() {
        log::error!("Form setup aborted: {}", e);
    }
}

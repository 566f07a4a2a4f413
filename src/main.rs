use scrip_calculator::{app, common::logging};

fn main() {
    logging::init();

    if let Err(err) = app::run(std::env::args()) {
        tracing::error!(error = %err, "scrip calculator stopped");
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }
}

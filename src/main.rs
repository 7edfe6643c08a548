use shopping_cart_cli::config::SessionConfig;
use shopping_cart_cli::console::Session;
use shopping_cart_cli::error::SessionError;
use shopping_cart_cli::logging::setup_tracing;
use std::io;

fn main() -> Result<(), SessionError> {
    setup_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();

    // Build the session over the process console and run until `T`
    let mut session = Session::new(stdin.lock(), stdout.lock(), SessionConfig::default());
    session.run()
}

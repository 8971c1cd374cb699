#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code so bad input never panics the kiosk.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

use kiosk::config::KioskConfig;
use kiosk::loader::load_books_from_path;
use kiosk::{Session, catalog_from};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr; stdout belongs to the menu.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kiosk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match KioskConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: books_file={}, delimiter={:?}",
        config.books_file.display(),
        char::from(config.delimiter)
    );

    let books = match load_books_from_path(&config.books_file, config.delimiter) {
        Ok(books) => books,
        Err(e) if e.is_not_found() => {
            tracing::warn!(
                "Books file {} not found, starting with an empty catalog",
                config.books_file.display()
            );
            Vec::new()
        }
        Err(e) => {
            tracing::error!("Failed to load {}: {e}", config.books_file.display());
            std::process::exit(1);
        }
    };

    let catalog = catalog_from(books);
    tracing::info!("Catalog ready with {} books", catalog.len());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(catalog, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        tracing::error!("Session ended with an I/O error: {e}");
        std::process::exit(1);
    }
}

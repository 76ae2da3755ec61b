use once_cell::sync::Lazy;
use postcodes::configuration::{Environment, get_configuration_from};
use postcodes::domain::PostalCodeFactory;
use postcodes::telemetry::{get_subscriber, init_subscriber};
use postcodes::{Country, PostalCode};
use std::path::PathBuf;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the type returned by `get_subscriber`, so each
    // branch builds and installs its own subscriber.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialise tracing.");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialise tracing.");
    };
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// A factory configured from the `local` configuration files of this crate.
pub fn configured_factory() -> PostalCodeFactory {
    init_tracing();

    let directory = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configuration");
    let settings =
        get_configuration_from(&directory, Environment::Local).expect("Failed to read configuration.");
    PostalCodeFactory::from_settings(&settings.normalization)
}

pub fn postal_code(iso: &str, raw: &str) -> PostalCode {
    init_tracing();

    let country = Country::parse(iso).expect("Failed to parse country.");
    PostalCode::parse(country, raw).expect("Failed to parse postal code.")
}

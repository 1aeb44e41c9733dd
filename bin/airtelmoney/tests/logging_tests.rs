use airtelmoney::utility::logging::setup_logging;

#[test]
fn test_setup_logging_installs_global_subscriber() {
    setup_logging();

    assert!(tracing::dispatcher::has_been_set());
    tracing::info!("subscriber installed");
}

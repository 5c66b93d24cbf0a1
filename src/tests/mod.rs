mod phonenumbervalidator_tests;

static ONCE: std::sync::Once = std::sync::Once::new();

/// Installs the test logger the first time any suite asks for it.
fn init_logger() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}

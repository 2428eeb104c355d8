use golem_citation::{CitationError, SearchTarget};
use golem_citation_openlaws::{OpenLaws, OpenLawsConfig};
use log::{LevelFilter, Log, Metadata, Record};

struct HostLogger;

impl Log for HostLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, _record: &Record) {}

    fn flush(&self) {}
}

static HOST_LOGGER: HostLogger = HostLogger;

// Own test binary: the logger is process-global.
#[test]
fn test_host_logger_level_is_preserved() {
    log::set_logger(&HOST_LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    std::env::remove_var(OpenLawsConfig::API_URL_VAR);
    std::env::set_var("GOLEM_CITATION_LOG", "warn");

    let result = OpenLaws.search("FED|12 CFR 1002.1");

    assert!(matches!(result, Err(CitationError::Configuration(_))));
    assert_eq!(log::max_level(), LevelFilter::Trace);
}

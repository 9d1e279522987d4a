use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use tracing_subscriber::EnvFilter;

use conduit_framework::{
    ArtifactRegistry, Callback, ConfigObject, Connector, Direction, FrameworkSettings,
    FromCallback, IntermediateDataFormat, IntermediateFormatSelector, ResolveError,
    SubmissionRequest, ToCallback,
};
use conduit_model::{Submission, SubmissionStatus};

fn init_logger() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug)]
struct TestConnector {
    name: &'static str,
    directions: Vec<Direction>,
}

impl TestConnector {
    fn new(name: &'static str, directions: &[Direction]) -> Arc<dyn Connector> {
        Arc::new(Self {
            name,
            directions: directions.to_vec(),
        })
    }
}

impl Connector for TestConnector {
    fn name(&self) -> &str {
        self.name
    }

    fn version(&self) -> &str {
        "0.1.0"
    }

    fn supported_directions(&self) -> &[Direction] {
        &self.directions
    }

    fn callback(&self, direction: Direction) -> Option<Callback> {
        if !self.supports(direction) {
            return None;
        }
        let callback = match direction {
            Direction::Source => FromCallback {
                initializer: format!("{}-from-initializer", self.name),
                partitioner: format!("{}-partitioner", self.name),
                extractor: format!("{}-extractor", self.name),
                destroyer: format!("{}-from-destroyer", self.name),
            }
            .into(),
            Direction::Destination => ToCallback {
                initializer: format!("{}-to-initializer", self.name),
                loader: format!("{}-loader", self.name),
                destroyer: format!("{}-to-destroyer", self.name),
            }
            .into(),
        };
        Some(callback)
    }
}

#[derive(Default)]
struct CsvFormat {
    line: Option<String>,
}

impl IntermediateDataFormat for CsvFormat {
    fn text_data(&self) -> Option<&str> {
        self.line.as_deref()
    }

    fn set_text_data(&mut self, data: String) {
        self.line = Some(data);
    }
}

#[derive(Debug, PartialEq)]
struct LinkConfig {
    connection_string: String,
}

#[derive(Debug, PartialEq)]
struct ThrottlingConfig {
    extractors: i32,
}

fn assert_send<T: Send>() {}

#[test]
fn test_fresh_request_has_both_directions_absent() {
    let request = SubmissionRequest::new();

    for direction in Direction::ALL {
        assert!(request.connector(direction).is_none());
        assert!(request.callback(direction).is_none());
        assert!(request.connector_connection_config(direction).is_none());
        assert!(request.connector_job_config(direction).is_none());
        assert!(request.framework_connection_config(direction).is_none());
        assert!(request.connector_context(direction).is_empty());
    }
    assert!(request.framework_job_config().is_none());
    assert!(request.framework_context().is_empty());
    assert!(request.jars().is_empty());
    assert!(request.summary().is_none());
    assert_eq!(request.job_name(), None);
    assert_eq!(request.job_id(), None);
    assert_eq!(request.extractors(), None);
    assert_eq!(request.loaders(), None);
    assert_eq!(request.output_directory(), None);
    assert_eq!(request.notification_url(), None);
    assert!(request.intermediate_format().is_none());
}

#[test]
fn test_build_then_inspect() {
    init_logger();

    //given
    let conn_a = TestConnector::new("jdbc", &[Direction::Source]);
    let mut request = SubmissionRequest::new();

    //when
    request.set_connector(Direction::Source, conn_a.clone());
    request.add_jar("lib/a.jar");
    request.add_jar("lib/a.jar");
    request.set_extractors(Some(4));

    //then
    let bound = request.connector(Direction::Source).expect("source connector");
    assert!(Arc::ptr_eq(bound, &conn_a));
    assert!(request.connector(Direction::Destination).is_none());
    assert_eq!(request.jars(), ["lib/a.jar"]);
    assert_eq!(request.extractors(), Some(4));
    assert_eq!(request.loaders(), None);
}

#[test]
fn test_full_request() {
    init_logger();

    //given
    let from = TestConnector::new("jdbc", &[Direction::Source, Direction::Destination]);
    let to = TestConnector::new("hdfs", &[Direction::Destination]);
    let mut registry = ArtifactRegistry::new();
    registry
        .register::<LinkConfig>("lib/jdbc-connector.jar")
        .register::<CsvFormat>("lib/conduit-idf.jar");
    let mut request = SubmissionRequest::new();

    //when
    request.set_summary(Submission::new(12, SubmissionStatus::Booting, 1_000));
    request.set_job_name("orders-to-hdfs");
    request.set_job_id(12);
    for (direction, connector) in [(Direction::Source, &from), (Direction::Destination, &to)] {
        if let Some(callback) = connector.callback(direction) {
            request.set_callback(direction, callback);
        }
        request.set_connector(direction, connector.clone());
    }
    request.set_connector_connection_config(
        Direction::Source,
        ConfigObject::new(LinkConfig {
            connection_string: "jdbc:mysql://db/orders".into(),
        }),
    );
    request.set_framework_job_config(ConfigObject::new(ThrottlingConfig { extractors: 4 }));
    request
        .add_jar_for_type::<LinkConfig, _>(&registry)
        .expect("registered");
    request
        .add_jar_for_type::<CsvFormat, _>(&registry)
        .expect("registered");
    request.set_intermediate_format(IntermediateFormatSelector::of::<CsvFormat>());
    request.set_output_directory("/data/orders");
    request.set_notification_url("http://localhost:8080/notify");
    request.set_loaders(Some(2));

    //then
    assert_eq!(request.summary().map(|s| s.job_id), Some(12));
    assert_eq!(request.job_name(), Some("orders-to-hdfs"));
    assert_eq!(
        request.callback(Direction::Source).map(Callback::direction),
        Some(Direction::Source)
    );
    match request.callback(Direction::Destination) {
        Some(Callback::To(to)) => assert_eq!(to.loader, "hdfs-loader"),
        other => panic!("unexpected callback {other:?}"),
    }
    assert_eq!(
        request
            .connector_connection_config(Direction::Source)
            .and_then(ConfigObject::downcast_ref::<LinkConfig>),
        Some(&LinkConfig {
            connection_string: "jdbc:mysql://db/orders".into()
        })
    );
    assert!(request.connector_connection_config(Direction::Destination).is_none());
    assert_eq!(
        request
            .framework_job_config()
            .and_then(ConfigObject::downcast_ref::<ThrottlingConfig>)
            .map(|c| c.extractors),
        Some(4)
    );
    assert_eq!(
        request.jars(),
        ["lib/jdbc-connector.jar", "lib/conduit-idf.jar"]
    );
    assert_eq!(
        request.intermediate_format(),
        Some(&IntermediateFormatSelector::of::<CsvFormat>())
    );
    assert_eq!(request.output_directory(), Some("/data/orders"));
    assert_eq!(request.notification_url(), Some("http://localhost:8080/notify"));
    assert_eq!(request.loaders(), Some(2));
}

#[test]
fn test_unresolvable_type_leaves_jars_untouched() {
    let registry = ArtifactRegistry::new();
    let mut request = SubmissionRequest::new();

    let err = request
        .add_jar_for_type::<CsvFormat, _>(&registry)
        .expect_err("nothing registered");

    assert!(matches!(err, ResolveError::UnknownType(_)));
    assert!(request.jars().is_empty());
}

#[test]
fn test_last_intermediate_format_wins() {
    #[derive(Default)]
    struct JsonFormat;

    impl IntermediateDataFormat for JsonFormat {
        fn text_data(&self) -> Option<&str> {
            None
        }

        fn set_text_data(&mut self, _data: String) {}
    }

    let mut request = SubmissionRequest::new();
    request.set_intermediate_format(IntermediateFormatSelector::of::<CsvFormat>());
    request.set_intermediate_format(IntermediateFormatSelector::of::<JsonFormat>());

    assert_eq!(
        request.intermediate_format(),
        Some(&IntermediateFormatSelector::of::<JsonFormat>())
    );
}

#[test]
fn test_executor_takes_over_contexts() {
    init_logger();
    assert_send::<SubmissionRequest>();

    //given
    let mut request = SubmissionRequest::new();
    request.set_connector(
        Direction::Source,
        TestConnector::new("jdbc", &[Direction::Source]),
    );
    request
        .connector_context_mut(Direction::Source)
        .set_string("table", "orders");

    //when
    let request = thread::spawn(move || {
        let mut request = request;
        request
            .connector_context_mut(Direction::Source)
            .set_long("partition.min", 0);
        request
            .connector_context_mut(Direction::Source)
            .set_long("partition.max", 1_000);
        request.framework_context_mut().set_int("extractors.used", 4);
        request
    })
    .join()
    .expect("executor thread");

    //then
    let source = request.connector_context(Direction::Source);
    assert_eq!(source.get_string("table"), Some("orders"));
    assert_eq!(source.get_long("partition.max", -1), 1_000);
    assert!(request.connector_context(Direction::Destination).is_empty());
    assert_eq!(request.framework_context().get_int("extractors.used", 0), 4);
}

#[test]
fn test_request_from_settings() {
    //given
    let settings = FrameworkSettings::load_str(
        r#"
        [submission]
        extractors = 2
        loaders = 1
        jars = ["lib/conduit-core.jar"]
        "#,
    )
    .expect("valid settings");
    let mut request = SubmissionRequest::new();
    request.set_loaders(Some(5));

    //when
    request.apply_settings(&settings.submission);

    //then
    assert_eq!(request.extractors(), Some(2));
    assert_eq!(request.loaders(), Some(5));
    assert_eq!(request.jars(), ["lib/conduit-core.jar"]);
}

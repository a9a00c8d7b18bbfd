// setup_tracing installs the process-wide subscriber used by the binaries.
pub fn setup_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(!json)
        .without_time()
        // logs go to stderr so stdout stays parseable.
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

use tracing::Level;

pub fn setup_tracing(level: Level, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // stdout belongs to the menu, so logs go to stderr.
        .with_writer(std::io::stderr)
        .without_time();
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

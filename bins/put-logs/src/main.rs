mod cmd;

use clap::Parser;
use cmd::config::{PutLogsArgs, UploadConfig};

const LONG_ABOUT: &str = r#"Helper test program to validate EMF processing.

Intended for use while developing the EMF writer: when a new kind of EMF record
is created, this program can be used to check that it behaves in CloudWatch the
way the developer expects. It is NOT intended for use by users of the writer.

It uploads a log to CloudWatch Logs. You can then go to CloudWatch Metrics to see
that the metrics have been ingested correctly. Processing may take several minutes.

First create a log group and a log stream, for example:

    aws logs create-log-group --log-group-name TestLogGroup &&
        aws logs create-log-stream --log-group-name TestLogGroup --log-stream-name TestLogStream

Then call this program with the log group, log stream and a log file:

    put-logs ./file.json --log-group=TestLogGroup --log-stream=TestLogStream

The file holds either a single JSON object:

    {"_aws":{"CloudWatchMetrics":[{"Namespace":"MyNS","Dimensions":[["label"]],"Metrics":[{"Name":"my_counter"}]}],"Timestamp":1},"label":"value1","my_counter":1}

or a JSON array of them:

    [
        {"_aws":{"CloudWatchMetrics":[{"Namespace":"MyNS","Dimensions":[["label"]],"Metrics":[{"Name":"my_counter"}]}],"Timestamp":1},"label":"value2","my_counter":2},
        {"_aws":{"CloudWatchMetrics":[{"Namespace":"MyNS","Dimensions":[[]],"Metrics":[{"Name":"my_counter"}]}],"Timestamp":1},"my_counter":3}
    ]

NOTE: the "_aws.Timestamp" of every record is rewritten to one second before the
current time. Unit-test fixtures carry canned timestamps far in the past, which
CloudWatch Metrics would not accept. This is not what you want in production."#;

#[derive(Parser)]
#[command(
    name = "put-logs",
    about = "Upload EMF records to CloudWatch Logs for manual validation",
    long_about = LONG_ABOUT
)]
struct Cli {
    #[command(flatten)]
    args: PutLogsArgs,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match UploadConfig::new(&cli.args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = cmd::upload::run(&config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::path::PathBuf;

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::try_parse_from([
            "put-logs",
            "./file.json",
            "--log-group=TestLogGroup",
            "--log-stream=TestLogStream",
            "--region=us-west-2",
        ])
        .unwrap();
        assert_eq!(cli.args.file, PathBuf::from("./file.json"));
        assert_eq!(cli.args.log_group, "TestLogGroup");
        assert_eq!(cli.args.log_stream, "TestLogStream");
        assert_eq!(cli.args.region.as_deref(), Some("us-west-2"));
    }

    #[test]
    fn space_separated_values_work_too() {
        let cli = Cli::try_parse_from([
            "put-logs",
            "f.json",
            "--log-group",
            "g",
            "--log-stream",
            "s",
        ])
        .unwrap();
        assert_eq!(cli.args.log_group, "g");
        assert_eq!(cli.args.region, None);
    }

    #[test]
    fn missing_log_group_is_usage_error() {
        let err = Cli::try_parse_from(["put-logs", "f.json", "--log-stream=s"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_file_argument_is_usage_error() {
        let err = Cli::try_parse_from(["put-logs", "--log-group=g", "--log-stream=s"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

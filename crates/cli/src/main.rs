use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    grocer_cli::run().await
}

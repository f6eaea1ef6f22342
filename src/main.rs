use std::process::ExitCode;

mod app;
mod cli;
mod logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();
    app::run(args).await
}

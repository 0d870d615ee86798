mod cli;
mod folders;
mod init;
mod logging;
mod runner;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}

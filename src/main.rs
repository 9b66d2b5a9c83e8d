use clap::Parser;

fn main() {
    let cli = huebulb::cli::Cli::parse();
    let exit_code = huebulb::run(cli);
    std::process::exit(exit_code);
}

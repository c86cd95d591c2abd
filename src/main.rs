use clap::Parser;
use fencestrip::{Cli, FenceStrip, FenceStripError, OutputFormatter, OutputMode};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    let fencestrip = match FenceStrip::from_cli(&cli) {
        Ok(fencestrip) => fencestrip,
        Err(e) => {
            print_startup_error(&e);
            return e.exit_code();
        }
    };

    if cli.print_config {
        return handle_print_config(&fencestrip);
    }

    // Any failure ends the run; files after the failing one are untouched.
    match fencestrip.run() {
        Ok(_) => 0,
        Err(e) => {
            fencestrip.handle_error(&e);
            e.exit_code()
        }
    }
}

fn handle_print_config(fencestrip: &FenceStrip) -> i32 {
    match fencestrip.describe_config() {
        Ok(rendered) => {
            fencestrip.output_formatter().print_header("Built-in cleanup targets");
            print!("{}", rendered);
            0
        }
        Err(e) => {
            fencestrip.handle_error(&e);
            e.exit_code()
        }
    }
}

fn print_startup_error(error: &FenceStripError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

use std::process::ExitCode;

fn main() -> ExitCode {
    expense_tracker::init();
    match expense_tracker::cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("expense_tracker_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

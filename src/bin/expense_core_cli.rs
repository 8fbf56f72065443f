use expense_core::cli::{self, output};

fn main() {
    expense_core::init();
    cli::print_instructions();

    if let Err(err) = cli::run_cli() {
        output::error(&err);
        std::process::exit(1);
    }
}

mod cli;
mod demo;
mod infra;

use sgem_scoring::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

mod check;
mod exam;
mod input;
mod load;
pub(crate) mod opt;
mod prompt;
mod quiz;
mod render;
mod schema;
mod session;
mod validate;

use crate::opt::Commands;
use anyhow::Error;

pub(crate) async fn exec(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Validate(o) => validate::validate(o).await,
        Commands::Check(o) => check::check(o).await,
        Commands::Quiz(o) => quiz::quiz(o).await,
        Commands::Exam(o) => exam::exam(o).await,
        Commands::Schema(o) => schema::exec(o),
    }
}

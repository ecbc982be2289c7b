use std::io::Write;

pub mod auth;
pub mod bookings;
pub mod cli;
pub mod listings;
pub mod state;

pub use cli::{Cli, Command};
pub use state::AppState;

pub async fn run<W: Write>(cli: Cli, state: &AppState, out: &mut W) -> anyhow::Result<()> {
    let json = cli.json;
    match cli.command {
        Command::List(args) => listings::list(state, &args, json, out),
        Command::Categories => listings::categories(json, out),
        Command::Show { id } => listings::show(state, id, json, out),
        Command::Add(args) => listings::add(state, args, json, out),
        Command::Mine => listings::mine(state, json, out),
        Command::Quote { id, duration } => bookings::quote(state, id, &duration, json, out),
        Command::Book(args) => bookings::book(state, args, json, out).await,
        Command::Login { email, password } => auth::login(state, email, password, json, out).await,
    }
}

use crate::{
    conf::settings,
    pkg::{internal::auth::Claims, server::listen},
    prelude::Result,
};
use clap::{Parser, Subcommand};

mod migrate;

#[derive(Parser)]
#[command(about = "job postings web service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Listen,
    Migrate,
    /// Mint a signed bearer token for manual testing and operations
    Token {
        #[arg(long)]
        username: String,
        #[arg(long, default_value_t = false)]
        admin: bool,
    },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Migrate) => {
            migrate::apply().await?;
        }
        Some(SubCommandType::Token { username, admin }) => {
            let token = Claims::new(&username, admin).sign(&settings.secret_key)?;
            println!("{}", token);
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}

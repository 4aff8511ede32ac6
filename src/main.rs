use std::time::{Duration, Instant};

use chrono::Local;
use clap::Parser;
use env_logger::Env;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::account::{Account, Directory, SaltedMd5Verifier};
use crate::command::Command;
use crate::config::Config;
use crate::error::BankError;
use crate::session::Session;

mod account;
mod command;
mod config;
mod error;
mod ledger;
mod render;
mod session;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Accounts file path (TOML). Falls back to the built-in demo accounts.
    accounts_file: Option<String>,

    /// Inactivity timeout in seconds
    #[clap(long, default_value_t = 300)]
    timeout: u64,
}

static COMMAND_HISTORY_FILE: &str = ".sparbank_history";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();

    let config = match &cli.accounts_file {
        Some(path) => Config::load_from_file(path)?,
        None => Config::demo(),
    };
    let mut directory = config.build_directory(Box::new(SaltedMd5Verifier), Local::now().naive_local());
    let mut session = Session::new(Duration::from_secs(cli.timeout));

    println!("Log in to get started, try: login j 123");

    let mut rl = DefaultEditor::new()?;
    if rl.load_history(COMMAND_HISTORY_FILE).is_err() {
        println!("No previous history.");
    }
    loop {
        let readline = rl.readline("> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                let now = Instant::now();
                if session.check_expiry(now) {
                    println!("Logged out after inactivity, log in again");
                }

                match command::parse(line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if let Err(err) = execute(command, &mut session, &mut directory, now) {
                            println!("{err}");
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }
    let _ = rl.save_history(COMMAND_HISTORY_FILE);
    Ok(())
}

fn execute(command: Command, session: &mut Session, directory: &mut Directory,
           now: Instant) -> Result<(), BankError> {
    let stamp = Local::now().naive_local();
    match command {
        Command::Login { username, secret } => {
            session.login(directory, &username, &secret, now)?;
            let account = current_account(session, directory)?;
            println!("Welcome back, {}", account.first_name());
            render::print_balance(account);
        }
        Command::Logout => {
            session.logout();
            println!("Logged out");
        }
        Command::Deposit(amount) => {
            session.deposit(directory, amount, stamp, now)?;
            render::print_balance(current_account(session, directory)?);
        }
        Command::Withdraw(amount) => {
            session.withdraw(directory, amount, stamp, now)?;
            render::print_balance(current_account(session, directory)?);
        }
        Command::Transfer { to, amount } => {
            session.transfer(directory, &to, amount, stamp, now)?;
            render::print_balance(current_account(session, directory)?);
        }
        Command::Movements { sorted } => {
            render::print_movements(current_account(session, directory)?, sorted, stamp);
        }
        Command::Summary => {
            render::print_summary(current_account(session, directory)?);
        }
        Command::Balance => {
            render::print_balance(current_account(session, directory)?);
        }
        Command::Help => {
            print_help();
        }
        // Handled by the REPL loop
        Command::Quit => {}
    }
    Ok(())
}

fn current_account<'a>(session: &Session, directory: &'a Directory) -> Result<&'a Account, BankError> {
    let username = session.current().ok_or(BankError::NotLoggedIn)?;
    directory.find_by_username(username).ok_or(BankError::NotLoggedIn)
}

fn print_help() {
    println!("Commands:");
    println!("  login <username> <secret>");
    println!("  logout");
    println!("  balance");
    println!("  movements [sorted]");
    println!("  summary");
    println!("  deposit <amount>");
    println!("  withdraw <amount>");
    println!("  transfer <username> <amount>");
    println!("  quit");
}

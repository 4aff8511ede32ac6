use anyhow::anyhow;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::combinator::{all_consuming, opt};
use nom::number::complete::double;
use nom::sequence::preceded;
use nom::{IResult, InputTakeAtPosition};

/// One REPL command
#[derive(Debug, PartialEq)]
pub(crate) enum Command {
    Login { username: String, secret: String },
    Logout,
    Deposit(f64),
    Withdraw(f64),
    Transfer { to: String, amount: f64 },
    /// Movement list, in insertion order or ascending by amount
    Movements { sorted: bool },
    Summary,
    Balance,
    Help,
    Quit,
}

pub(crate) fn parse(input: &str) -> anyhow::Result<Command> {
    let result = all_consuming(command)(input.trim());
    match result {
        Ok((_, command)) => Ok(command),
        Err(_) => Err(anyhow!("unrecognised command, try 'help'")),
    }
}

fn command(input: &str) -> IResult<&str, Command> {
    alt((login, logout, deposit, withdraw, transfer, movements, summary, balance, help, quit))(input)
}

/// LOGIN username secret
fn login(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("LOGIN")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, username) = non_space(input)?;
    let (input, _) = multispace1(input)?;
    let (input, secret) = non_space(input)?;
    Ok((input, Command::Login { username: username.to_string(), secret: secret.to_string() }))
}

fn logout(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("LOGOUT")(input)?;
    Ok((input, Command::Logout))
}

/// DEPOSIT amount
fn deposit(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("DEPOSIT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, amount) = double(input)?;
    Ok((input, Command::Deposit(amount)))
}

/// WITHDRAW amount
fn withdraw(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("WITHDRAW")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, amount) = double(input)?;
    Ok((input, Command::Withdraw(amount)))
}

/// TRANSFER username amount
fn transfer(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("TRANSFER")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, to) = non_space(input)?;
    let (input, _) = multispace1(input)?;
    let (input, amount) = double(input)?;
    Ok((input, Command::Transfer { to: to.to_string(), amount }))
}

/// MOVEMENTS [SORTED]
fn movements(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("MOVEMENTS")(input)?;
    let (input, sorted) = opt(preceded(multispace1, tag_no_case("SORTED")))(input)?;
    Ok((input, Command::Movements { sorted: sorted.is_some() }))
}

fn summary(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("SUMMARY")(input)?;
    Ok((input, Command::Summary))
}

fn balance(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("BALANCE")(input)?;
    Ok((input, Command::Balance))
}

fn help(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("HELP")(input)?;
    Ok((input, Command::Help))
}

fn quit(input: &str) -> IResult<&str, Command> {
    let (input, _) = alt((tag_no_case("QUIT"), tag_no_case("EXIT")))(input)?;
    Ok((input, Command::Quit))
}

fn non_space(input: &str) -> IResult<&str, &str> {
    input.split_at_position1_complete(char::is_whitespace, nom::error::ErrorKind::TakeWhile1)
}

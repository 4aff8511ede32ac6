use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use log::{debug, info};

use crate::account::Directory;
use crate::error::BankError;
use crate::ledger;

/// At most one authenticated account, plus the inactivity countdown. The
/// countdown is a single deadline: login and every mutating action reset it to
/// the full window, and it is checked on each REPL event before the command
/// runs. There is never more than one pending deadline.
pub(crate) struct Session {
    current: Option<String>,
    deadline: Option<Instant>,
    timeout: Duration,
}

impl Session {
    pub(crate) fn new(timeout: Duration) -> Session {
        Session { current: None, deadline: None, timeout }
    }

    /// Username of the logged-in account, if any
    pub(crate) fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub(crate) fn login(&mut self, directory: &Directory, username: &str, secret: &str,
                        now: Instant) -> Result<(), BankError> {
        match directory.find_by_credentials(username, secret) {
            Some(account) => {
                self.current = Some(account.username.clone());
                self.deadline = Some(now + self.timeout);
                info!("{} logged in", account.username);
                Ok(())
            }
            None => {
                debug!("login rejected for '{username}'");
                Err(BankError::CredentialsRejected)
            }
        }
    }

    pub(crate) fn logout(&mut self) {
        if let Some(username) = self.current.take() {
            info!("{username} logged out");
        }
        self.deadline = None;
    }

    /// Force a logout when the inactivity deadline has passed. Returns true if
    /// the session expired on this check.
    pub(crate) fn check_expiry(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                info!("session expired after inactivity");
                self.logout();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn deposit(&mut self, directory: &mut Directory, amount: f64,
                          date: NaiveDateTime, now: Instant) -> Result<(), BankError> {
        let username = self.require_login()?;
        validate_amount(amount)?;

        let account = directory.get_mut(&username).ok_or(BankError::NotLoggedIn)?;
        account.append(amount, date);
        self.touch(now);
        Ok(())
    }

    pub(crate) fn withdraw(&mut self, directory: &mut Directory, amount: f64,
                           date: NaiveDateTime, now: Instant) -> Result<(), BankError> {
        let username = self.require_login()?;
        validate_amount(amount)?;

        let account = directory.get_mut(&username).ok_or(BankError::NotLoggedIn)?;
        let balance = ledger::balance(account.movements());
        if amount > balance {
            debug!("withdrawal of {amount} rejected, balance is {balance}");
            return Err(BankError::InsufficientFunds { balance });
        }

        account.append(-amount, date);
        self.touch(now);
        Ok(())
    }

    /// All-or-nothing: the recipient is resolved and the sender balance checked
    /// before either side is touched.
    pub(crate) fn transfer(&mut self, directory: &mut Directory, to: &str, amount: f64,
                           date: NaiveDateTime, now: Instant) -> Result<(), BankError> {
        let username = self.require_login()?;
        validate_amount(amount)?;
        if directory.find_by_username(to).is_none() {
            debug!("transfer rejected, no recipient '{to}'");
            return Err(BankError::RecipientNotFound(to.to_string()));
        }

        let sender = directory.get_mut(&username).ok_or(BankError::NotLoggedIn)?;
        let balance = ledger::balance(sender.movements());
        if amount > balance {
            debug!("transfer of {amount} rejected, balance is {balance}");
            return Err(BankError::InsufficientFunds { balance });
        }
        sender.append(-amount, date);

        // Resolved above, so this cannot miss
        if let Some(recipient) = directory.get_mut(to) {
            recipient.append(amount, date);
        }
        self.touch(now);
        Ok(())
    }

    fn require_login(&self) -> Result<String, BankError> {
        self.current.clone().ok_or(BankError::NotLoggedIn)
    }

    fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.timeout);
    }
}

/// Amounts must be finite and strictly positive; anything else is rejected
/// before any account is touched.
fn validate_amount(amount: f64) -> Result<(), BankError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(BankError::InvalidAmount)
    }
}

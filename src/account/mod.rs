mod credential;

use std::collections::HashMap;
use chrono::NaiveDateTime;

pub(crate) use credential::{Credential, CredentialVerifier, SaltedMd5Verifier};

/// A single signed movement on an account. Positive is a deposit, negative a
/// withdrawal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Movement {
    pub(crate) amount: f64,
    pub(crate) date: NaiveDateTime,
}

impl Movement {
    pub(crate) fn new(amount: f64, date: NaiveDateTime) -> Movement {
        Movement { amount, date }
    }

    pub(crate) fn is_deposit(&self) -> bool {
        self.amount > 0.0
    }
}

pub(crate) struct Account {
    pub(crate) username: String,
    credential: Credential,
    pub(crate) owner: String,

    /// Append-only while the process runs; insertion order is chronological,
    /// oldest first.
    movements: Vec<Movement>,

    /// Interest rate in percent applied to each deposit
    pub(crate) interest_rate: f64,
    pub(crate) currency: String,
    pub(crate) locale: String,
}

impl Account {
    pub(crate) fn new(username: String, credential: Credential, owner: String,
                      movements: Vec<Movement>, interest_rate: f64,
                      currency: String, locale: String) -> Account {
        Account { username, credential, owner, movements, interest_rate, currency, locale }
    }

    pub(crate) fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub(crate) fn append(&mut self, amount: f64, date: NaiveDateTime) {
        self.movements.push(Movement::new(amount, date));
    }

    /// First word of the owner name, for the welcome message
    pub(crate) fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or(&self.owner)
    }
}

/// Fixed registry of all known accounts, keyed by username. Populated once at
/// startup; no accounts are created or removed at runtime.
pub(crate) struct Directory {
    accounts: HashMap<String, Account>,
    verifier: Box<dyn CredentialVerifier>,
}

impl Directory {
    pub(crate) fn new(accounts: Vec<Account>, verifier: Box<dyn CredentialVerifier>) -> Directory {
        let accounts = accounts.into_iter()
            .map(|account| (account.username.clone(), account))
            .collect();
        Directory { accounts, verifier }
    }

    /// Case-sensitive lookup on username plus credential verification. A miss is
    /// a normal outcome, not a fault.
    pub(crate) fn find_by_credentials(&self, username: &str, secret: &str) -> Option<&Account> {
        let account = self.accounts.get(username)?;
        if self.verifier.verify(secret, &account.credential) {
            Some(account)
        } else {
            None
        }
    }

    pub(crate) fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    pub(crate) fn get_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.get_mut(username)
    }
}

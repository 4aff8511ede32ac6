use std::fs;

use anyhow::Context;
use chrono::{Duration, NaiveDateTime};
use serde::Deserialize;

use crate::account::{Account, CredentialVerifier, Directory, Movement};

/// Accounts file. Secrets are plaintext here and hashed on load; nothing keeps
/// them around afterwards.
#[derive(Deserialize, Debug)]
pub(crate) struct Config {
    accounts: Vec<AccountConfig>,
}

#[derive(Deserialize, Debug)]
struct AccountConfig {
    username: String,
    secret: String,
    owner: String,
    movements: Vec<f64>,
    interest_rate: f64,
    currency: String,
    locale: String,
}

impl Config {
    pub(crate) fn load_from_file(file_path: &str) -> anyhow::Result<Config> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("cannot read accounts file {file_path}"))?;
        let config = toml::from_str::<Config>(&content)
            .with_context(|| format!("cannot parse accounts file {file_path}"))?;
        Ok(config)
    }

    /// The built-in demo accounts, used when no accounts file is given
    pub(crate) fn demo() -> Config {
        Config {
            accounts: vec![
                AccountConfig {
                    username: "j".to_string(),
                    secret: "123".to_string(),
                    owner: "Jimmy L".to_string(),
                    movements: vec![3500.0, 1000.0, -800.0, 1200.0, 3600.0, -1500.0, 500.0, 2500.0, -5000.0, 1800.0],
                    interest_rate: 1.5,
                    currency: "SEK".to_string(),
                    locale: "sv-SE".to_string(),
                },
                AccountConfig {
                    username: "christian".to_string(),
                    secret: "123".to_string(),
                    owner: "Christian. C".to_string(),
                    movements: vec![4500.0, 500.0, -750.0, 200.0, 3200.0, -1800.0, 500.0, 1200.0, -1750.0, 1800.0],
                    interest_rate: 1.5,
                    currency: "SEK".to_string(),
                    locale: "sv-SE".to_string(),
                },
            ],
        }
    }

    /// Build the account directory, hashing each secret with `verifier`. Seeded
    /// movements are backdated one day apart with the newest landing on `now`,
    /// so the relative-age labels have something to show.
    pub(crate) fn build_directory(&self, verifier: Box<dyn CredentialVerifier>,
                                  now: NaiveDateTime) -> Directory {
        let accounts = self.accounts.iter().map(|cfg| {
            let count = cfg.movements.len() as i64;
            let movements = cfg.movements.iter().enumerate()
                .map(|(index, amount)| {
                    let age_days = count - 1 - index as i64;
                    Movement::new(*amount, now - Duration::days(age_days))
                })
                .collect();

            Account::new(
                cfg.username.clone(),
                verifier.derive(&cfg.username, &cfg.secret),
                cfg.owner.clone(),
                movements,
                cfg.interest_rate,
                cfg.currency.clone(),
                cfg.locale.clone(),
            )
        }).collect();

        Directory::new(accounts, verifier)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::account::SaltedMd5Verifier;
    use crate::config::Config;
    use crate::ledger;

    #[test]
    fn test_demo_directory() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let directory = Config::demo().build_directory(Box::new(SaltedMd5Verifier), now);

        let account = directory.find_by_credentials("j", "123").unwrap();
        assert_eq!(account.owner, "Jimmy L");
        assert_eq!(ledger::balance(account.movements()), 6800.0);

        // Oldest first, newest seeded today
        let moves = account.movements();
        assert!(moves.first().unwrap().date < moves.last().unwrap().date);
        assert_eq!(moves.last().unwrap().date, now);

        assert!(directory.find_by_credentials("j", "wrong").is_none());
    }

    #[test]
    fn test_parse_accounts_file() {
        let content = r#"
            [[accounts]]
            username = "j"
            secret = "123"
            owner = "Jimmy L"
            movements = [100.0, -50.0]
            interest_rate = 1.5
            currency = "SEK"
            locale = "sv-SE"
        "#;
        let config = toml::from_str::<Config>(content).unwrap();
        assert_eq!(config.accounts.len(), 1);
        assert_eq!(config.accounts[0].movements, vec![100.0, -50.0]);
    }
}

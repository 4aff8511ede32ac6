use chrono::NaiveDateTime;
use comfy_table::{Cell, CellAlignment, Table, TableComponent};

use crate::account::{Account, Movement};
use crate::ledger;

pub(crate) fn print_movements(account: &Account, sorted: bool, now: NaiveDateTime) {
    let sorted_copy;
    let moves: &[Movement] = if sorted {
        sorted_copy = ledger::sorted_view(account.movements());
        &sorted_copy
    } else {
        account.movements()
    };

    let mut table = base_table();
    table.set_header(vec!["#", "Type", "Date", "Amount"]);
    for (index, movement) in moves.iter().enumerate() {
        let direction = if movement.is_deposit() { "deposit" } else { "withdrawal" };
        table.add_row(vec![
            Cell::new((index + 1).to_string()).set_alignment(CellAlignment::Right),
            Cell::new(direction),
            Cell::new(format_movement_date(movement.date, now, &account.locale)),
            Cell::new(format_currency(movement.amount, &account.currency)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

pub(crate) fn print_summary(account: &Account) {
    let moves = account.movements();

    let mut table = base_table();
    table.set_header(vec!["In", "Out", "Interest"]);
    table.add_row(vec![
        Cell::new(format_currency(ledger::total_inbound(moves), &account.currency)).set_alignment(CellAlignment::Right),
        Cell::new(format_currency(ledger::total_outbound(moves), &account.currency)).set_alignment(CellAlignment::Right),
        Cell::new(format_currency(ledger::accrued_interest(moves, account.interest_rate), &account.currency)).set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
}

pub(crate) fn print_balance(account: &Account) {
    println!("Balance: {}", format_currency(ledger::balance(account.movements()), &account.currency));
}

fn base_table() -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table
}

pub(crate) fn format_currency(amount: f64, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}

/// Relative age for recent movements, a calendar date for anything older than a
/// week. Swedish locales get Swedish labels.
pub(crate) fn format_movement_date(date: NaiveDateTime, now: NaiveDateTime, locale: &str) -> String {
    let swedish = locale.starts_with("sv");
    let days_passed = (now.date() - date.date()).num_days();
    match days_passed {
        0 => if swedish { "Idag".to_string() } else { "today".to_string() },
        1 => if swedish { "Igår".to_string() } else { "yesterday".to_string() },
        2..=7 => {
            if swedish {
                format!("{days_passed} dagar sedan")
            } else {
                format!("{days_passed} days ago")
            }
        }
        _ => date.format("%-d %b %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use crate::render::{format_currency, format_movement_date};

    fn at_noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_movement_date() {
        let now = at_noon(2024, 3, 10);

        assert_eq!(format_movement_date(at_noon(2024, 3, 10), now, "en-GB"), "today");
        assert_eq!(format_movement_date(at_noon(2024, 3, 9), now, "en-GB"), "yesterday");
        assert_eq!(format_movement_date(at_noon(2024, 3, 5), now, "en-GB"), "5 days ago");
        assert_eq!(format_movement_date(at_noon(2024, 3, 3), now, "en-GB"), "7 days ago");
        assert_eq!(format_movement_date(at_noon(2024, 3, 2), now, "en-GB"), "2 Mar 2024");

        assert_eq!(format_movement_date(at_noon(2024, 3, 10), now, "sv-SE"), "Idag");
        assert_eq!(format_movement_date(at_noon(2024, 3, 9), now, "sv-SE"), "Igår");
        assert_eq!(format_movement_date(at_noon(2024, 3, 5), now, "sv-SE"), "5 dagar sedan");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(6800.0, "SEK"), "6800.00 SEK");
        assert_eq!(format_currency(-1500.5, "SEK"), "-1500.50 SEK");
    }
}

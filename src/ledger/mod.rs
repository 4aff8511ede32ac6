use crate::account::Movement;

/// Current balance: sum of all movement amounts. Empty sequence yields 0.
pub(crate) fn balance(movements: &[Movement]) -> f64 {
    movements.iter().map(|m| m.amount).sum()
}

/// Sum of all deposits (amounts > 0).
pub(crate) fn total_inbound(movements: &[Movement]) -> f64 {
    movements.iter().map(|m| m.amount).filter(|a| *a > 0.0).sum()
}

/// Sum of all withdrawals (amounts < 0). Keeps the sign, so the result is <= 0.
pub(crate) fn total_outbound(movements: &[Movement]) -> f64 {
    movements.iter().map(|m| m.amount).filter(|a| *a < 0.0).sum()
}

/// Interest accrued on deposits at `rate_percent`. Accruals below 1 currency unit
/// are dropped; the floor applies to the computed interest, not the deposit.
pub(crate) fn accrued_interest(movements: &[Movement], rate_percent: f64) -> f64 {
    movements.iter()
        .filter(|m| m.amount > 0.0)
        .map(|m| m.amount * rate_percent / 100.0)
        .filter(|interest| *interest >= 1.0)
        .sum()
}

/// A new copy of the movements sorted ascending by amount. The input is left in
/// insertion order for the unsorted display mode.
pub(crate) fn sorted_view(movements: &[Movement]) -> Vec<Movement> {
    let mut view = movements.to_vec();
    view.sort_by(|a, b| a.amount.total_cmp(&b.amount));
    view
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::account::Movement;
    use crate::ledger::{accrued_interest, balance, sorted_view, total_inbound, total_outbound};

    fn movements(amounts: &[f64]) -> Vec<Movement> {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
        amounts.iter().map(|a| Movement::new(*a, date)).collect()
    }

    #[test]
    fn test_balance_and_totals() {
        let moves = movements(&[3500.0, 1000.0, -800.0, 1200.0, 3600.0, -1500.0, 500.0, 2500.0, -5000.0, 1800.0]);
        assert_eq!(balance(&moves), 6800.0);
        assert_eq!(total_inbound(&moves), 14100.0);
        assert_eq!(total_outbound(&moves), -7300.0);
        assert_eq!(balance(&moves), total_inbound(&moves) + total_outbound(&moves));

        assert_eq!(balance(&[]), 0.0);
    }

    #[test]
    fn test_interest_floor_applies_to_computed_interest() {
        // At 1.5% a 50 deposit accrues 0.75, below the 1-unit floor
        let moves = movements(&[50.0]);
        assert_eq!(accrued_interest(&moves, 1.5), 0.0);

        // A 100 deposit accrues 1.5 and is kept
        let moves = movements(&[100.0]);
        assert_eq!(accrued_interest(&moves, 1.5), 1.5);

        // Withdrawals never accrue
        let moves = movements(&[100.0, -100.0, 50.0]);
        assert_eq!(accrued_interest(&moves, 1.5), 1.5);
    }

    #[test]
    fn test_sorted_view_is_a_permutation_and_leaves_input_alone() {
        let moves = movements(&[200.0, -400.0, 100.0]);
        let view = sorted_view(&moves);

        let amounts: Vec<f64> = view.iter().map(|m| m.amount).collect();
        assert_eq!(amounts, vec![-400.0, 100.0, 200.0]);

        // Same multiset, original order untouched
        let original: Vec<f64> = moves.iter().map(|m| m.amount).collect();
        assert_eq!(original, vec![200.0, -400.0, 100.0]);
        assert_eq!(view.len(), moves.len());
    }
}

use crate::config::TaxBracket;

/// Personal income tax under a progressive schedule using the
/// subtraction-trick form: `tax = income * rate - subtracted_amount` for
/// the selected bracket.
///
/// Bracket selection scans the table from the highest threshold down and
/// picks the first bracket whose threshold is strictly below the income.
/// Income at or below zero owes nothing. Income below every threshold
/// falls back to the lowest bracket, unreachable with a table whose
/// lowest threshold is zero.
///
/// `brackets` must be non-empty and ordered by ascending threshold; the
/// caller validates. A miscalibrated table can produce a negative result,
/// which is returned as-is so misconfiguration stays visible.
pub fn progressive_tax(taxable_income: f64, brackets: &[TaxBracket]) -> f64 {
    if taxable_income <= 0.0 {
        return 0.0;
    }

    let bracket = brackets
        .iter()
        .rev()
        .find(|b| b.threshold < taxable_income)
        .unwrap_or(&brackets[0]);

    (taxable_income * bracket.rate - bracket.subtracted_amount).round()
}

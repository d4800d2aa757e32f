//! Small text helpers shared by the reports.

/// An amount with its currency symbol, e.g. `₹16000`.
pub(crate) fn money(currency: &str, amount: u64) -> String {
    format!("{currency}{amount}")
}

/// Join items as "A, B or C".
pub(crate) fn join_or(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

/// One `• item` line per entry.
pub(crate) fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

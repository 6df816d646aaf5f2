/// Indonesian rupiah: `Rp 1.250.000`, cents only when present (`Rp 12,50`).
pub fn format_rupiah(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents_total = (amount.abs() * 100.0).round() as u64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if cents == 0 {
        format!("{}Rp {}", sign, grouped)
    } else {
        format!("{}Rp {},{:02}", sign, grouped, cents)
    }
}

//! Форматирование денежных значений для UI

/// Символ валюты перед суммой
pub const CURRENCY_SYMBOL: &str = "$";

/// Два знака после точки, без разделителя тысяч
///
/// # Примеры
///
/// ```
/// use frontend::shared::format::format_money;
/// assert_eq!(format_money(5.5), "5.50");
/// ```
pub fn format_money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Сумма с символом валюты: `$5.50`, для отрицательных `-$5.50`
///
/// # Примеры
///
/// ```
/// use frontend::shared::format::format_price;
/// assert_eq!(format_price(3.0), "$3.00");
/// ```
pub fn format_price(value: f64) -> String {
    if value < 0.0 {
        format!("-{}{}", CURRENCY_SYMBOL, format_money(-value))
    } else {
        format!("{}{}", CURRENCY_SYMBOL, format_money(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(5.5), "5.50");
        assert_eq!(format_money(1234.567), "1234.57");
        assert_eq!(format_money(0.1 + 0.2), "0.30");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(2.5), "$2.50");
        assert_eq!(format_price(99.999), "$100.00");
        assert_eq!(format_price(-1.5), "-$1.50");
    }
}

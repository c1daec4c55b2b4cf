use crate::models::{FieldValue, TransactionRecord, PLACEHOLDER};
use crate::ui::{TableBody, TableRow};

pub const COLUMNS: [&str; 5] = ["Date", "Event", "Quantity", "Vintage", "User"];

/// Render a number with `,` thousands separators and at most three
/// fraction digits. Non-numeric values are displayed unchanged.
pub fn format_number(value: &FieldValue) -> String {
    let Some(n) = value.as_f64() else {
        return value.to_string();
    };

    let (int_part, frac_part) = round_fraction(&n.abs().to_string(), 3);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac_part.len() + 2);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if n < 0.0 && !is_zero {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Round a plain decimal string to `digits` fraction digits, ties away from
/// zero. Works on the written digits, so `1.0005` is a tie even though the
/// nearest `f64` sits just below it.
fn round_fraction(decimal: &str, digits: usize) -> (String, String) {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));
    if frac_part.len() <= digits {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes()[digits] >= b'5';
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..digits].bytes())
        .collect();
    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let to_string = |bytes: &[u8]| bytes.iter().map(|&b| b as char).collect::<String>();
    (to_string(&kept[..split]), to_string(&kept[split..]))
}

fn text_cell(value: Option<&FieldValue>) -> String {
    match value {
        Some(v) if !v.is_falsy() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn quantity_cell(value: Option<&FieldValue>) -> String {
    match value {
        Some(v) if v.is_number() => format_number(v),
        other => text_cell(other),
    }
}

pub fn transaction_row(transaction: &TransactionRecord) -> TableRow {
    TableRow {
        cells: vec![
            text_cell(transaction.date.as_ref()),
            text_cell(transaction.event.as_ref()),
            quantity_cell(transaction.quantity.as_ref()),
            text_cell(transaction.vintage.as_ref()),
            text_cell(transaction.user.as_ref()),
        ],
    }
}

pub fn populate_transactions_table(body: &mut TableBody, transactions: &[TransactionRecord]) {
    body.clear();
    for transaction in transactions {
        body.append(transaction_row(transaction));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(&FieldValue::from(0)), "0");
        assert_eq!(format_number(&FieldValue::from(999)), "999");
        assert_eq!(format_number(&FieldValue::from(1000)), "1,000");
        assert_eq!(format_number(&FieldValue::from(1234567)), "1,234,567");
        assert_eq!(format_number(&FieldValue::from(-98765)), "-98,765");
    }

    #[test]
    fn keeps_at_most_three_fraction_digits() {
        assert_eq!(format_number(&FieldValue::from(1234.5)), "1,234.5");
        assert_eq!(format_number(&FieldValue::from(0.12345)), "0.123");
        assert_eq!(format_number(&FieldValue::from(2.0009)), "2.001");
        assert_eq!(format_number(&FieldValue::from(-0.0001)), "0");
        assert_eq!(format_number(&FieldValue::from(1.0625)), "1.063");
        assert_eq!(format_number(&FieldValue::from(1.0005)), "1.001");
        assert_eq!(format_number(&FieldValue::from(-2.0625)), "-2.063");
    }

    #[test]
    fn rounding_carries_into_the_integer_part() {
        assert_eq!(format_number(&FieldValue::from(0.9995)), "1");
        assert_eq!(format_number(&FieldValue::from(999999.9996)), "1,000,000");
    }

    #[test]
    fn leaves_strings_alone() {
        assert_eq!(format_number(&FieldValue::from("12000")), "12000");
    }

    #[test]
    fn missing_or_falsy_fields_render_placeholder() {
        let transaction: TransactionRecord = serde_json::from_value(json!({
            "Date": "2023-01-05",
            "Event": "",
            "Quantity": 0,
            "User": false
        }))
        .unwrap();

        let row = transaction_row(&transaction);

        assert_eq!(row.cells, vec!["2023-01-05", "-", "0", "-", "-"]);
    }

    #[test]
    fn repopulating_replaces_previous_rows() {
        let transactions = vec![
            TransactionRecord {
                quantity: Some(FieldValue::from(25000)),
                ..TransactionRecord::default()
            },
            TransactionRecord::default(),
        ];
        let mut body = TableBody::default();

        populate_transactions_table(&mut body, &transactions);
        populate_transactions_table(&mut body, &transactions);

        assert_eq!(body.len(), 2);
        assert_eq!(body.rows()[0].cells[2], "25,000");
        assert_eq!(body.rows()[1].cells, vec![PLACEHOLDER; 5]);
    }
}

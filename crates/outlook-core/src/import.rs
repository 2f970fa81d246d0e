//! Loading forecast inputs from JSON documents and transaction CSVs

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ForecastInput, Transaction};

/// Read a forecast input document from disk
pub fn load_input(path: &Path) -> Result<ForecastInput> {
    let file = File::open(path)?;
    let input = parse_input(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        transactions = input.transactions.len(),
        recurring = input.recurring.len(),
        "Loaded forecast input"
    );
    Ok(input)
}

/// Parse a forecast input document
pub fn parse_input<R: Read>(reader: R) -> Result<ForecastInput> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read a transaction history CSV from disk
pub fn load_transactions_csv(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path)?;
    parse_transactions_csv(file)
}

/// Parse transaction history CSV
/// Format: date,amount,category_id,is_recurring,is_income
///
/// Only `date` and `amount` are required; the other columns may be absent
/// or blank.
pub fn parse_transactions_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let date_col = column("date").ok_or_else(|| Error::Import("Missing date column".into()))?;
    let amount_col =
        column("amount").ok_or_else(|| Error::Import("Missing amount column".into()))?;
    let category_col = column("category_id");
    let recurring_col = column("is_recurring");
    let income_col = column("is_income");

    let mut transactions = Vec::new();

    for (line, result) in rdr.records().enumerate() {
        let record = result?;

        let date_str = record
            .get(date_col)
            .ok_or_else(|| Error::Import(format!("Row {}: missing date", line + 1)))?;
        let amount_str = record
            .get(amount_col)
            .ok_or_else(|| Error::Import(format!("Row {}: missing amount", line + 1)))?;

        let optional = |col: Option<usize>| {
            col.and_then(|c| record.get(c))
                .map(str::to_string)
                .filter(|s| !s.is_empty())
        };

        transactions.push(Transaction {
            date: parse_date(date_str)?,
            amount: parse_amount(amount_str)?,
            category_id: optional(category_col),
            is_recurring: optional(recurring_col).map(|s| parse_flag(&s)).transpose()?,
            is_income: optional(income_col).map(|s| parse_flag(&s)).transpose()?,
        });
    }

    debug!(count = transactions.len(), "Parsed transaction CSV");
    Ok(transactions)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%m/%d/%Y", // 01/15/2024
        "%m/%d/%y", // 01/15/24
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::Import(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::Import(format!("Unable to parse amount: {}", s)))
}

fn parse_flag(s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(Error::Import(format!("Unable to parse flag: {}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("01/15/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("15th Jan").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_amount("(45.00)").unwrap(), -45.0);
        assert_eq!(parse_amount("-12").unwrap(), -12.0);
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_parse_transactions_csv() {
        let csv = "date,amount,category_id,is_recurring,is_income\n\
                   2024-05-01,5200.00,,yes,true\n\
                   2024-05-03,-1800,rent,true,\n\
                   05/20/2024,$200.00,,,\n";

        let txs = parse_transactions_csv(csv.as_bytes()).unwrap();
        assert_eq!(txs.len(), 3);

        assert!(txs[0].is_income());
        assert_eq!(txs[0].is_recurring, Some(true));
        assert_eq!(txs[0].category_id, None);

        assert_eq!(txs[1].category_id.as_deref(), Some("rent"));
        assert_eq!(txs[1].is_income, None);
        assert!(txs[1].is_expense());

        // No income flag: neither income nor expense
        assert!(!txs[2].is_income());
        assert!(!txs[2].is_expense());
    }

    #[test]
    fn test_csv_minimal_columns() {
        let csv = "Amount,Date\n-10.5,2024-02-02\n";
        let txs = parse_transactions_csv(csv.as_bytes()).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, -10.5);
    }

    #[test]
    fn test_csv_missing_amount_column() {
        let csv = "date,value\n2024-02-02,10\n";
        let err = parse_transactions_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Import(_)));
    }

    #[test]
    fn test_csv_bad_flag() {
        let csv = "date,amount,is_income\n2024-02-02,10,maybe\n";
        assert!(parse_transactions_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_input_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "as_of": "2024-06-30",
                "transactions": [
                    {{"date": "2024-06-01", "amount": 4000, "is_income": true}},
                    {{"date": "2024-06-02", "amount": -900, "category_id": "rent"}}
                ],
                "recurring": [
                    {{"name": "Netflix", "amount": -15.49, "frequency": "monthly"}}
                ],
                "snapshot": {{"net_worth": 1000, "total_assets": 3000, "total_liabilities": 2000}}
            }}"#
        )
        .unwrap();

        let input = load_input(file.path()).unwrap();
        assert_eq!(input.as_of, NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(input.transactions.len(), 2);
        assert_eq!(input.recurring.len(), 1);
        assert_eq!(input.snapshot.total_liabilities, 2000.0);
    }

    #[test]
    fn test_parse_input_requires_snapshot() {
        let err = parse_input(r#"{"transactions": []}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}

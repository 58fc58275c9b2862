//! Per-day diary summaries returned by the month calendar endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{diary_id, MonthKey};
use crate::credentials::CredentialProvider;
use crate::error::FetchError;

/// Currency unit appended to formatted amounts.
pub const CURRENCY_UNIT: &str = "원";

/// Emotion recorded for a diary day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Emotion {
    Happy,
    Excited,
    Calm,
    Soso,
    Sad,
    Angry,
    Tired,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Excited,
        Emotion::Calm,
        Emotion::Soso,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Tired,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Happy => "😊",
            Emotion::Excited => "🤩",
            Emotion::Calm => "😌",
            Emotion::Soso => "😐",
            Emotion::Sad => "😢",
            Emotion::Angry => "😡",
            Emotion::Tired => "😪",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Happy => "행복",
            Emotion::Excited => "신남",
            Emotion::Calm => "평온",
            Emotion::Soso => "그저 그럼",
            Emotion::Sad => "슬픔",
            Emotion::Angry => "화남",
            Emotion::Tired => "피곤",
        }
    }
}

/// Income and expense totals keyed the way the API sends them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountTotals {
    #[serde(rename = "INCOME", default, skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
    #[serde(rename = "EXPENSE", default, skip_serializing_if = "Option::is_none")]
    pub expense: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Day in `yyyyMMdd` form
    pub date: String,
    /// `None` when the tag is missing or not one this client knows
    #[serde(default, deserialize_with = "lenient_emotion")]
    pub emotion: Option<Emotion>,
    /// Whether the day has other content (todos, question answer)
    #[serde(default)]
    pub etc: bool,
    #[serde(default)]
    pub account: AccountTotals,
}

fn lenient_emotion<'de, D>(deserializer: D) -> Result<Option<Emotion>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tag = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(tag.and_then(|value| serde_json::from_value(value).ok()))
}

/// Pick the summary recorded for `day`, if any. Dates are unique per month,
/// so the first match is the only one.
pub fn find_summary(summaries: &[DaySummary], day: NaiveDate) -> Option<&DaySummary> {
    let id = diary_id(day);
    summaries.iter().find(|summary| summary.date == id)
}

/// Decode the month calendar response body. A JSON `null` body means the
/// month has no entries yet.
pub fn decode_month_summaries(body: &str) -> Result<Vec<DaySummary>, FetchError> {
    serde_json::from_str::<Option<Vec<DaySummary>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Digits kept after the decimal point, matching the browser's default
/// locale number format.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Insert `,` between every group of three digits.
pub fn group_thousands(whole: u128) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Thousands-separated amount, e.g. `12,000` or `1,500.5`. Fractions are
/// rounded to three digits and trailing zeros dropped. Never uses exponents.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let scale = 10u128.pow(MAX_FRACTION_DIGITS);
    // float to int casts saturate
    let scaled = (amount.abs() * scale as f64).round() as u128;
    let (whole, fraction) = (scaled / scale, scaled % scale);

    let mut out = String::new();
    if amount < 0.0 && scaled != 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if fraction != 0 {
        let digits = format!("{fraction:0width$}", width = MAX_FRACTION_DIGITS as usize);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// `+1,500원`, or `None` when there is no income to show.
pub fn format_income(amount: Option<f64>) -> Option<String> {
    signed_amount('+', amount)
}

/// `-12,000원`, or `None` when there is no expense to show.
pub fn format_expense(amount: Option<f64>) -> Option<String> {
    signed_amount('-', amount)
}

fn signed_amount(sign: char, amount: Option<f64>) -> Option<String> {
    match amount {
        Some(value) if value != 0.0 && value.is_finite() => Some(format!(
            "{sign}{}{CURRENCY_UNIT}",
            format_amount(value.abs())
        )),
        _ => None,
    }
}

/// A month calendar request that is ready to send. It can only be built when
/// a token is available, so a missing credential never reaches the network.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    month_key: MonthKey,
    url: String,
    token: String,
}

impl SummaryRequest {
    pub fn new(
        base_url: &str,
        month_key: &MonthKey,
        credentials: &dyn CredentialProvider,
    ) -> Result<Self, FetchError> {
        let token = credentials
            .token()
            .filter(|token| !token.trim().is_empty())
            .ok_or(FetchError::MissingToken)?;

        Ok(Self {
            month_key: month_key.clone(),
            url: format!(
                "{}/api/contents/monthCalendar/{}",
                base_url.trim_end_matches('/'),
                month_key
            ),
            token,
        })
    }

    pub fn month_key(&self) -> &MonthKey {
        &self.month_key
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Value of the `authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::month_key;
    use crate::credentials::StaticToken;

    fn summary(date: &str, emotion: Emotion) -> DaySummary {
        DaySummary {
            date: date.to_string(),
            emotion: Some(emotion),
            etc: false,
            account: AccountTotals::default(),
        }
    }

    #[test]
    fn test_decode_api_shape() {
        let body = r#"[
            {"date": "20240305", "emotion": "HAPPY", "etc": true,
             "account": {"INCOME": 15000, "EXPENSE": 3200.5}},
            {"date": "20240306", "emotion": "SAD", "etc": false, "account": {}}
        ]"#;

        let summaries = decode_month_summaries(body).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].emotion, Some(Emotion::Happy));
        assert!(summaries[0].etc);
        assert_eq!(summaries[0].account.income, Some(15000.0));
        assert_eq!(summaries[0].account.expense, Some(3200.5));
        assert_eq!(summaries[1].account, AccountTotals::default());
    }

    #[test]
    fn test_decode_null_and_garbage() {
        assert_eq!(decode_month_summaries("null").unwrap(), vec![]);
        assert!(matches!(
            decode_month_summaries(r#"{"message": "nope"}"#),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            decode_month_summaries(r#"[{"date": 20240305}]"#),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_unknown_emotion_keeps_the_rest_of_the_month() {
        let body = r#"[
            {"date": "20240305", "emotion": "BORED", "etc": true, "account": {"INCOME": 1500}},
            {"date": "20240306", "emotion": null, "account": {"EXPENSE": 200}},
            {"date": "20240307", "account": {}},
            {"date": "20240308", "emotion": "CALM"}
        ]"#;

        let summaries = decode_month_summaries(body).unwrap();
        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries[0].emotion, None);
        assert!(summaries[0].etc);
        assert_eq!(summaries[0].account.income, Some(1500.0));
        assert_eq!(summaries[1].emotion, None);
        assert_eq!(summaries[1].account.expense, Some(200.0));
        assert_eq!(summaries[2].emotion, None);
        assert_eq!(summaries[3].emotion, Some(Emotion::Calm));
    }

    #[test]
    fn test_find_summary_exact_date() {
        let summaries = vec![
            summary("20240305", Emotion::Happy),
            summary("20240315", Emotion::Tired),
        ];

        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            find_summary(&summaries, day).unwrap().emotion,
            Some(Emotion::Tired)
        );

        let missing = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        assert!(find_summary(&summaries, missing).is_none());

        // Same day number in another month does not match
        let other_month = NaiveDate::from_ymd_opt(2024, 4, 5).unwrap();
        assert!(find_summary(&summaries, other_month).is_none());
    }

    #[test]
    fn test_amount_formatting() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1500.0), "1,500");
        assert_eq!(format_amount(1234567.0), "1,234,567");
        assert_eq!(format_amount(-1234.0), "-1,234");

        assert_eq!(format_income(Some(15000.0)).as_deref(), Some("+15,000원"));
        assert_eq!(format_expense(Some(3200.0)).as_deref(), Some("-3,200원"));
        assert_eq!(format_income(Some(0.0)), None);
        assert_eq!(format_expense(None), None);
    }

    #[test]
    fn test_large_and_fractional_amounts_stay_plain() {
        assert_eq!(format_amount(1e12), "1,000,000,000,000");
        assert_eq!(format_amount(1e15), "1,000,000,000,000,000");
        assert_eq!(format_amount(0.5), "0.5");
        assert_eq!(format_amount(0.4), "0.4");
        assert_eq!(format_amount(1500.5), "1,500.5");
        assert_eq!(format_amount(999.9), "999.9");
        assert_eq!(format_amount(0.001), "0.001");
        assert_eq!(format_amount(1.23456), "1.235");
        assert_eq!(format_amount(0.0004), "0");

        assert_eq!(format_income(Some(0.4)).as_deref(), Some("+0.4원"));
        assert_eq!(format_expense(Some(1e12)).as_deref(), Some("-1,000,000,000,000원"));
        assert!(!format_amount(f64::from(u32::MAX) * 1e6).contains('e'));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(u64::MAX as u128), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_signed_amount_ignores_input_sign() {
        assert_eq!(format_expense(Some(-3200.0)).as_deref(), Some("-3,200원"));
        assert_eq!(format_income(Some(-15.5)).as_deref(), Some("+15.5원"));
        assert_eq!(format_income(Some(f64::NAN)), None);
    }

    #[test]
    fn test_request_requires_token() {
        let key = month_key(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        assert_eq!(
            SummaryRequest::new("", &key, &StaticToken::none()),
            Err(FetchError::MissingToken)
        );
        assert_eq!(
            SummaryRequest::new("", &key, &StaticToken::new("  ")),
            Err(FetchError::MissingToken)
        );
    }

    #[test]
    fn test_request_url_and_header() {
        let key = month_key(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let request =
            SummaryRequest::new("https://diary.example/", &key, &StaticToken::new("abc")).unwrap();

        assert_eq!(
            request.url(),
            "https://diary.example/api/contents/monthCalendar/202403"
        );
        assert_eq!(request.authorization(), "Bearer abc");
        assert_eq!(request.month_key(), &key);

        let relative = SummaryRequest::new("", &key, &StaticToken::new("abc")).unwrap();
        assert_eq!(relative.url(), "/api/contents/monthCalendar/202403");
    }

    #[test]
    fn test_emotion_tables_cover_every_variant() {
        for emotion in Emotion::ALL {
            assert!(!emotion.emoji().is_empty());
            assert!(!emotion.label().is_empty());
        }
    }
}

//! Query-string contract between the search form and the results view.
//!
//! Write side: [`SearchQuery::to_query_string`] serializes a validated
//! search as `mode=bus&from=..&to=..&dep=..[&ret=..]&pax=..` with ISO-8601
//! timestamps. Read side: [`ResultsQuery::parse`] tolerates any subset of
//! the keys being absent or malformed and never fails.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// The only search mode currently produced by the form.
pub const MODE_BUS: &str = "bus";

/// A validated search handed off by the bus form.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub from: String,
    pub to: String,
    pub departure: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub passengers: u32,
}

impl SearchQuery {
    /// Serialize as a URL query string. `ret` is omitted entirely when no
    /// return date is set.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = vec![
            ("mode", MODE_BUS.to_string()),
            ("from", self.from.clone()),
            ("to", self.to.clone()),
            ("dep", iso_timestamp(&self.departure)),
        ];
        if let Some(ret) = &self.return_date {
            pairs.push(("ret", iso_timestamp(ret)));
        }
        pairs.push(("pax", self.passengers.to_string()));

        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode_component(value)))
            .collect::<Vec<String>>()
            .join("&")
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix,
/// e.g. `2024-01-01T00:00:00.000Z`.
pub fn iso_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Midnight UTC for a picked calendar date.
pub fn date_to_timestamp(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc()
}

/// Raw query parameters as seen by the results view. Absent keys stay
/// empty; values are percent-decoded but otherwise untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsQuery {
    pub mode: String,
    pub from: String,
    pub to: String,
    pub dep: String,
    pub ret: String,
    pub pax: String,
}

impl ResultsQuery {
    /// Parse a query string, tolerating a leading `?`, unknown keys, and
    /// any missing or malformed pieces.
    pub fn parse(query: &str) -> Self {
        let mut out = ResultsQuery::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&') {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, decode_component(value)),
                None => (pair, String::new()),
            };
            match key {
                "mode" => out.mode = value,
                "from" => out.from = value,
                "to" => out.to = value,
                "dep" => out.dep = value,
                "ret" => out.ret = value,
                "pax" => out.pax = value,
                _ => {}
            }
        }
        out
    }

    /// Whether a return leg was supplied at all. The results view omits the
    /// return row entirely when this is false.
    pub fn has_return(&self) -> bool {
        !self.ret.is_empty()
    }
}

/// `dd/MM/yyyy` for an ISO timestamp; `-` when absent or unparseable.
pub fn format_day(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp.format("%d/%m/%Y").to_string(),
        Err(_) => "-".to_string(),
    }
}

/// Percent-encode a query component, keeping the RFC 3986 unreserved set.
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Decode percent sequences and `+`. Invalid sequences pass through as-is.
fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..=i + 2]).unwrap_or("");
                match u8::from_str_radix(hex, 16) {
                    Ok(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    Err(_) => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_query(with_return: bool) -> SearchQuery {
        SearchQuery {
            from: "HAN".to_string(),
            to: "SGN".to_string(),
            departure: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            return_date: with_return
                .then(|| Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap()),
            passengers: 2,
        }
    }

    #[test]
    fn test_query_string_one_way() {
        assert_eq!(
            sample_query(false).to_query_string(),
            "mode=bus&from=HAN&to=SGN&dep=2024-01-01T00%3A00%3A00.000Z&pax=2"
        );
    }

    #[test]
    fn test_query_string_round_trip_includes_ret() {
        let encoded = sample_query(true).to_query_string();
        assert!(encoded.contains("&ret=2024-01-03T00%3A00%3A00.000Z&"));
    }

    #[test]
    fn test_iso_timestamp_matches_wire_format() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(iso_timestamp(&ts), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_parse_reads_back_what_was_written() {
        let parsed = ResultsQuery::parse(&sample_query(true).to_query_string());
        assert_eq!(parsed.mode, "bus");
        assert_eq!(parsed.from, "HAN");
        assert_eq!(parsed.to, "SGN");
        assert_eq!(parsed.dep, "2024-01-01T00:00:00.000Z");
        assert_eq!(parsed.ret, "2024-01-03T00:00:00.000Z");
        assert_eq!(parsed.pax, "2");
    }

    #[test]
    fn test_parse_without_return() {
        let parsed =
            ResultsQuery::parse("from=HAN&to=SGN&dep=2024-01-01T00%3A00%3A00.000Z&pax=2");
        assert!(!parsed.has_return());
        assert_eq!(parsed.pax, "2");
    }

    #[test]
    fn test_parse_tolerates_leading_question_mark_and_junk() {
        let parsed = ResultsQuery::parse("?mode=bus&bogus=1&from=HAN&broken");
        assert_eq!(parsed.mode, "bus");
        assert_eq!(parsed.from, "HAN");
        assert_eq!(parsed.to, "");
    }

    #[test]
    fn test_parse_empty_query() {
        assert_eq!(ResultsQuery::parse(""), ResultsQuery::default());
        assert_eq!(ResultsQuery::parse("?"), ResultsQuery::default());
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day("2024-01-01T00:00:00.000Z"), "01/01/2024");
        assert_eq!(format_day(""), "-");
        assert_eq!(format_day("not-a-date"), "-");
    }

    #[test]
    fn test_decode_handles_plus_and_invalid_sequences() {
        assert_eq!(decode_component("a+b"), "a b");
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
        assert_eq!(decode_component("%3A"), ":");
    }

    #[test]
    fn test_encode_round_trips_unicode() {
        let original = "Tiếng Việt / 中文";
        assert_eq!(decode_component(&encode_component(original)), original);
    }
}

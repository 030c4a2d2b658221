use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV data for all bookable locations.
pub static CSV_OBJECT: &str = include_str!("../fixtures/locations.csv");

/// A bookable place, identified by a unique short code plus a display name
/// and the province/region it belongs to.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Location {
    pub short_code: String,
    pub english_name: String,
    pub code_state: String,
}

impl Location {
    /// Get the location vector from the embedded CSV.
    pub fn get_location_vector() -> Vec<Location> {
        if let Ok(locations) = Location::parse_location_csv(CSV_OBJECT) {
            locations
        } else {
            panic!("failed to parse locations csv")
        }
    }

    /// Parse a CSV string of location data into a vector of Locations.
    ///
    /// Expected CSV columns: short_code, english_name, code_state
    pub fn parse_location_csv(csv_object: &str) -> Result<Vec<Location>, std::io::Error> {
        let mut location_list: Vec<Location> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let location = Location {
                short_code: String::from(record.get(0).unwrap_or("").trim()),
                english_name: String::from(record.get(1).unwrap_or("").trim()),
                code_state: String::from(record.get(2).unwrap_or("").trim()),
            };
            if location.short_code.is_empty() {
                continue;
            }
            location_list.push(location);
        }
        Ok(location_list)
    }

    /// Display label shown in the combobox input once an option is picked.
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.english_name, self.code_state)
    }

    /// Case-insensitive substring match over english name, region, and code.
    /// An empty or whitespace-only needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.english_name.to_lowercase().contains(&needle)
            || self.code_state.to_lowercase().contains(&needle)
            || self.short_code.to_lowercase().contains(&needle)
    }
}

/// Find a location by its short code.
pub fn find_by_code<'a>(locations: &'a [Location], code: &str) -> Option<&'a Location> {
    locations.iter().find(|l| l.short_code == code)
}

/// English name for a short code, or the empty string when the code is
/// unknown.
pub fn english_name_for(locations: &[Location], code: &str) -> String {
    find_by_code(locations, code)
        .map(|l| l.english_name.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_vector() {
        let locations = Location::get_location_vector();
        assert_eq!(locations.len(), 24);
    }

    #[test]
    fn test_short_codes_are_unique() {
        let locations = Location::get_location_vector();
        let mut codes: Vec<&str> = locations.iter().map(|l| l.short_code.as_str()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), locations.len());
    }

    #[test]
    fn test_display_label() {
        let location = Location {
            short_code: "HAN".to_string(),
            english_name: "Hanoi".to_string(),
            code_state: "Ha Noi".to_string(),
        };
        assert_eq!(location.display_label(), "Hanoi - Ha Noi");
    }

    #[test]
    fn test_matches_search() {
        let location = Location {
            short_code: "SGN".to_string(),
            english_name: "Ho Chi Minh City".to_string(),
            code_state: "Ho Chi Minh".to_string(),
        };
        assert!(location.matches_search("chi minh"));
        assert!(location.matches_search("SGN"));
        assert!(location.matches_search("sgn"));
        assert!(location.matches_search("  "));
        assert!(!location.matches_search("hanoi"));
    }

    #[test]
    fn test_find_by_code() {
        let locations = Location::get_location_vector();
        assert_eq!(find_by_code(&locations, "HAN").map(|l| l.english_name.as_str()), Some("Hanoi"));
        assert!(find_by_code(&locations, "XXX").is_none());
    }

    #[test]
    fn test_english_name_for_unknown_code_is_empty() {
        let locations = Location::get_location_vector();
        assert_eq!(english_name_for(&locations, "SGN"), "Ho Chi Minh City");
        assert_eq!(english_name_for(&locations, "XXX"), "");
    }
}

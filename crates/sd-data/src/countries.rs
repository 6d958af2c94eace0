//! Static country registry
//!
//! Maps 2-letter residence codes to 3-letter codes plus a rough
//! centroid used by the map view. Lookups are pure; an unknown code is
//! `None`, never an error. Centroids are approximate country centers,
//! good enough to place a marker.

use ahash::AHashMap;
use once_cell::sync::Lazy;

/// One registry entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    /// Approximate centroid, degrees north.
    pub lat: f64,
    /// Approximate centroid, degrees east.
    pub lon: f64,
}

/// Look up a registry entry by its 2-letter code (uppercase, exact).
pub fn lookup(alpha2: &str) -> Option<&'static Country> {
    BY_ALPHA2.get(alpha2).copied()
}

/// Derive the 3-letter code for a 2-letter residence code.
pub fn alpha3(alpha2: &str) -> Option<&'static str> {
    lookup(alpha2).map(|c| c.alpha3)
}

/// Look up a registry entry by its 3-letter code.
pub fn by_alpha3(alpha3: &str) -> Option<&'static Country> {
    BY_ALPHA3.get(alpha3).copied()
}

static BY_ALPHA2: Lazy<AHashMap<&'static str, &'static Country>> =
    Lazy::new(|| REGISTRY.iter().map(|c| (c.alpha2, c)).collect());

static BY_ALPHA3: Lazy<AHashMap<&'static str, &'static Country>> =
    Lazy::new(|| REGISTRY.iter().map(|c| (c.alpha3, c)).collect());

macro_rules! country {
    ($a2:literal, $a3:literal, $name:literal, $lat:literal, $lon:literal) => {
        Country {
            alpha2: $a2,
            alpha3: $a3,
            name: $name,
            lat: $lat,
            lon: $lon,
        }
    };
}

static REGISTRY: &[Country] = &[
    country!("AD", "AND", "Andorra", 42.5, 1.5),
    country!("AE", "ARE", "United Arab Emirates", 24.0, 54.0),
    country!("AF", "AFG", "Afghanistan", 33.0, 65.0),
    country!("AG", "ATG", "Antigua and Barbuda", 17.05, -61.8),
    country!("AL", "ALB", "Albania", 41.0, 20.0),
    country!("AM", "ARM", "Armenia", 40.0, 45.0),
    country!("AO", "AGO", "Angola", -12.5, 18.5),
    country!("AR", "ARG", "Argentina", -34.0, -64.0),
    country!("AT", "AUT", "Austria", 47.3, 13.3),
    country!("AU", "AUS", "Australia", -25.0, 134.0),
    country!("AZ", "AZE", "Azerbaijan", 40.5, 47.5),
    country!("BA", "BIH", "Bosnia and Herzegovina", 44.0, 18.0),
    country!("BD", "BGD", "Bangladesh", 24.0, 90.0),
    country!("BE", "BEL", "Belgium", 50.8, 4.7),
    country!("BG", "BGR", "Bulgaria", 43.0, 25.0),
    country!("BH", "BHR", "Bahrain", 26.0, 50.5),
    country!("BM", "BMU", "Bermuda", 32.3, -64.75),
    country!("BO", "BOL", "Bolivia", -17.0, -65.0),
    country!("BR", "BRA", "Brazil", -10.0, -52.0),
    country!("BS", "BHS", "Bahamas", 24.25, -76.0),
    country!("BW", "BWA", "Botswana", -22.0, 24.0),
    country!("BY", "BLR", "Belarus", 53.0, 28.0),
    country!("BZ", "BLZ", "Belize", 17.25, -88.75),
    country!("CA", "CAN", "Canada", 56.0, -106.0),
    country!("CD", "COD", "Congo, Democratic Republic of the", -2.5, 23.5),
    country!("CF", "CAF", "Central African Republic", 7.0, 21.0),
    country!("CG", "COG", "Congo", -1.0, 15.0),
    country!("CH", "CHE", "Switzerland", 47.0, 8.0),
    country!("CI", "CIV", "Cote d'Ivoire", 8.0, -5.0),
    country!("CL", "CHL", "Chile", -30.0, -71.0),
    country!("CM", "CMR", "Cameroon", 6.0, 12.0),
    country!("CN", "CHN", "China", 35.0, 105.0),
    country!("CO", "COL", "Colombia", 4.0, -72.0),
    country!("CR", "CRI", "Costa Rica", 10.0, -84.0),
    country!("CU", "CUB", "Cuba", 21.5, -80.0),
    country!("CY", "CYP", "Cyprus", 35.0, 33.0),
    country!("CZ", "CZE", "Czechia", 49.75, 15.5),
    country!("DE", "DEU", "Germany", 51.0, 9.0),
    country!("DK", "DNK", "Denmark", 56.0, 10.0),
    country!("DO", "DOM", "Dominican Republic", 19.0, -70.7),
    country!("DZ", "DZA", "Algeria", 28.0, 3.0),
    country!("EC", "ECU", "Ecuador", -2.0, -77.5),
    country!("EE", "EST", "Estonia", 59.0, 26.0),
    country!("EG", "EGY", "Egypt", 27.0, 30.0),
    country!("ER", "ERI", "Eritrea", 15.0, 39.0),
    country!("ES", "ESP", "Spain", 40.0, -4.0),
    country!("ET", "ETH", "Ethiopia", 8.0, 38.0),
    country!("FI", "FIN", "Finland", 64.0, 26.0),
    country!("FJ", "FJI", "Fiji", -18.0, 175.0),
    country!("FR", "FRA", "France", 46.0, 2.0),
    country!("GA", "GAB", "Gabon", -1.0, 11.75),
    country!("GB", "GBR", "United Kingdom", 54.0, -2.0),
    country!("GE", "GEO", "Georgia", 42.0, 43.5),
    country!("GH", "GHA", "Ghana", 8.0, -2.0),
    country!("GI", "GIB", "Gibraltar", 36.13, -5.35),
    country!("GR", "GRC", "Greece", 39.0, 22.0),
    country!("GT", "GTM", "Guatemala", 15.5, -90.25),
    country!("HK", "HKG", "Hong Kong", 22.3, 114.2),
    country!("HN", "HND", "Honduras", 15.0, -86.5),
    country!("HR", "HRV", "Croatia", 45.17, 15.5),
    country!("HT", "HTI", "Haiti", 19.0, -72.4),
    country!("HU", "HUN", "Hungary", 47.0, 20.0),
    country!("ID", "IDN", "Indonesia", -5.0, 120.0),
    country!("IE", "IRL", "Ireland", 53.0, -8.0),
    country!("IL", "ISR", "Israel", 31.5, 34.75),
    country!("IN", "IND", "India", 20.0, 77.0),
    country!("IQ", "IRQ", "Iraq", 33.0, 44.0),
    country!("IR", "IRN", "Iran", 32.0, 53.0),
    country!("IS", "ISL", "Iceland", 65.0, -18.0),
    country!("IT", "ITA", "Italy", 42.8, 12.8),
    country!("JE", "JEY", "Jersey", 49.2, -2.1),
    country!("JM", "JAM", "Jamaica", 18.25, -77.5),
    country!("JO", "JOR", "Jordan", 31.0, 36.0),
    country!("JP", "JPN", "Japan", 36.0, 138.0),
    country!("KE", "KEN", "Kenya", 1.0, 38.0),
    country!("KG", "KGZ", "Kyrgyzstan", 41.0, 75.0),
    country!("KH", "KHM", "Cambodia", 13.0, 105.0),
    country!("KR", "KOR", "Korea, Republic of", 37.0, 127.5),
    country!("KW", "KWT", "Kuwait", 29.3, 47.75),
    country!("KZ", "KAZ", "Kazakhstan", 48.0, 68.0),
    country!("LA", "LAO", "Lao People's Democratic Republic", 18.0, 105.0),
    country!("LB", "LBN", "Lebanon", 33.8, 35.8),
    country!("LK", "LKA", "Sri Lanka", 7.0, 81.0),
    country!("LT", "LTU", "Lithuania", 56.0, 24.0),
    country!("LU", "LUX", "Luxembourg", 49.75, 6.17),
    country!("LV", "LVA", "Latvia", 57.0, 25.0),
    country!("LY", "LBY", "Libya", 25.0, 17.0),
    country!("MA", "MAR", "Morocco", 32.0, -5.0),
    country!("MD", "MDA", "Moldova", 47.0, 29.0),
    country!("ME", "MNE", "Montenegro", 42.5, 19.3),
    country!("MG", "MDG", "Madagascar", -20.0, 47.0),
    country!("MK", "MKD", "North Macedonia", 41.8, 22.0),
    country!("ML", "MLI", "Mali", 17.0, -4.0),
    country!("MM", "MMR", "Myanmar", 22.0, 98.0),
    country!("MN", "MNG", "Mongolia", 46.0, 105.0),
    country!("MT", "MLT", "Malta", 35.8, 14.6),
    country!("MU", "MUS", "Mauritius", -20.3, 57.6),
    country!("MX", "MEX", "Mexico", 23.0, -102.0),
    country!("MY", "MYS", "Malaysia", 2.5, 112.5),
    country!("MZ", "MOZ", "Mozambique", -18.25, 35.0),
    country!("NA", "NAM", "Namibia", -22.0, 17.0),
    country!("NE", "NER", "Niger", 16.0, 8.0),
    country!("NG", "NGA", "Nigeria", 10.0, 8.0),
    country!("NI", "NIC", "Nicaragua", 13.0, -85.0),
    country!("NL", "NLD", "Netherlands", 52.5, 5.75),
    country!("NO", "NOR", "Norway", 62.0, 10.0),
    country!("NP", "NPL", "Nepal", 28.0, 84.0),
    country!("NZ", "NZL", "New Zealand", -41.0, 174.0),
    country!("OM", "OMN", "Oman", 21.0, 57.0),
    country!("PA", "PAN", "Panama", 9.0, -80.0),
    country!("PE", "PER", "Peru", -10.0, -76.0),
    country!("PH", "PHL", "Philippines", 13.0, 122.0),
    country!("PK", "PAK", "Pakistan", 30.0, 70.0),
    country!("PL", "POL", "Poland", 52.0, 20.0),
    country!("PR", "PRI", "Puerto Rico", 18.25, -66.5),
    country!("PT", "PRT", "Portugal", 39.5, -8.0),
    country!("PY", "PRY", "Paraguay", -23.0, -58.0),
    country!("QA", "QAT", "Qatar", 25.5, 51.25),
    country!("RO", "ROU", "Romania", 46.0, 25.0),
    country!("RS", "SRB", "Serbia", 44.0, 21.0),
    country!("RU", "RUS", "Russian Federation", 60.0, 100.0),
    country!("RW", "RWA", "Rwanda", -2.0, 30.0),
    country!("SA", "SAU", "Saudi Arabia", 25.0, 45.0),
    country!("SD", "SDN", "Sudan", 15.0, 30.0),
    country!("SE", "SWE", "Sweden", 62.0, 15.0),
    country!("SG", "SGP", "Singapore", 1.37, 103.8),
    country!("SI", "SVN", "Slovenia", 46.12, 14.82),
    country!("SK", "SVK", "Slovakia", 48.67, 19.5),
    country!("SN", "SEN", "Senegal", 14.0, -14.0),
    country!("SO", "SOM", "Somalia", 10.0, 49.0),
    country!("SV", "SLV", "El Salvador", 13.83, -88.92),
    country!("SY", "SYR", "Syrian Arab Republic", 35.0, 38.0),
    country!("TH", "THA", "Thailand", 15.0, 100.0),
    country!("TN", "TUN", "Tunisia", 34.0, 9.0),
    country!("TR", "TUR", "Turkiye", 39.0, 35.0),
    country!("TT", "TTO", "Trinidad and Tobago", 10.5, -61.3),
    country!("TW", "TWN", "Taiwan", 23.5, 121.0),
    country!("TZ", "TZA", "Tanzania", -6.0, 35.0),
    country!("UA", "UKR", "Ukraine", 49.0, 32.0),
    country!("UG", "UGA", "Uganda", 1.0, 32.0),
    country!("US", "USA", "United States", 38.0, -97.0),
    country!("UY", "URY", "Uruguay", -33.0, -56.0),
    country!("UZ", "UZB", "Uzbekistan", 41.0, 64.0),
    country!("VE", "VEN", "Venezuela", 8.0, -66.0),
    country!("VN", "VNM", "Viet Nam", 16.0, 106.0),
    country!("YE", "YEM", "Yemen", 15.0, 48.0),
    country!("ZA", "ZAF", "South Africa", -29.0, 24.0),
    country!("ZM", "ZMB", "Zambia", -15.0, 30.0),
    country!("ZW", "ZWE", "Zimbabwe", -20.0, 30.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_to_three_letter_codes() {
        assert_eq!(alpha3("US"), Some("USA"));
        assert_eq!(alpha3("BR"), Some("BRA"));
        assert_eq!(alpha3("GB"), Some("GBR"));
        assert_eq!(alpha3("DE"), Some("DEU"));
    }

    #[test]
    fn unknown_codes_are_none() {
        assert_eq!(alpha3("XX"), None);
        assert_eq!(alpha3(""), None);
        // Lookups are exact; lowercase input is not a registry code.
        assert_eq!(alpha3("us"), None);
    }

    #[test]
    fn three_letter_lookups_round_trip() {
        let us = by_alpha3("USA").expect("registered");
        assert_eq!(us.alpha2, "US");
        assert_eq!(us.name, "United States");
        assert!(us.lat > 0.0 && us.lon < 0.0);
    }

    #[test]
    fn registry_codes_are_unique() {
        use std::collections::HashSet;
        let mut two = HashSet::new();
        let mut three = HashSet::new();
        for country in REGISTRY {
            assert!(two.insert(country.alpha2), "duplicate {}", country.alpha2);
            assert!(three.insert(country.alpha3), "duplicate {}", country.alpha3);
        }
    }
}

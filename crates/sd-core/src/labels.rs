//! Display labels for the coded categorical columns
//!
//! Each coded column gets an explicit enum with a total `from_code` /
//! `label` pair; the `*_label` helpers fall back to the original code
//! when it is unknown, so normalization never rejects a row.

/// Seniority of the observed role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Senior,
    Mid,
    Junior,
    Executive,
}

impl ExperienceLevel {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SE" => Some(Self::Senior),
            "MI" => Some(Self::Mid),
            "EN" => Some(Self::Junior),
            "EX" => Some(Self::Executive),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Senior => "Senior",
            Self::Mid => "Mid",
            Self::Junior => "Junior",
            Self::Executive => "Executive",
        }
    }
}

/// Contract type of the observed role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
}

impl EmploymentType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FT" => Some(Self::FullTime),
            "PT" => Some(Self::PartTime),
            "CT" => Some(Self::Contract),
            "FL" => Some(Self::Freelance),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Freelance => "Freelance",
        }
    }
}

/// Size bracket of the employing company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

impl CompanySize {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "S" => Some(Self::Small),
            "M" => Some(Self::Medium),
            "L" => Some(Self::Large),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

/// Share of remote work, coded as 0 / 50 / 100 in the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteRatio {
    Office,
    Hybrid,
    Remote,
}

impl RemoteRatio {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Office),
            50 => Some(Self::Hybrid),
            100 => Some(Self::Remote),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::Hybrid => "Hybrid",
            Self::Remote => "Remote",
        }
    }
}

/// Decode a seniority code, keeping unknown codes unchanged.
pub fn experience_label(code: &str) -> String {
    match ExperienceLevel::from_code(code) {
        Some(level) => level.label().to_string(),
        None => code.to_string(),
    }
}

/// Decode a contract-type code, keeping unknown codes unchanged.
pub fn employment_label(code: &str) -> String {
    match EmploymentType::from_code(code) {
        Some(kind) => kind.label().to_string(),
        None => code.to_string(),
    }
}

/// Decode a company-size code, keeping unknown codes unchanged.
pub fn company_size_label(code: &str) -> String {
    match CompanySize::from_code(code) {
        Some(size) => size.label().to_string(),
        None => code.to_string(),
    }
}

/// Decode a remote-ratio code, keeping unknown codes unchanged.
pub fn remote_label(code: i64) -> String {
    match RemoteRatio::from_code(code) {
        Some(ratio) => ratio.label().to_string(),
        None => code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_decode_to_labels() {
        assert_eq!(experience_label("SE"), "Senior");
        assert_eq!(experience_label("MI"), "Mid");
        assert_eq!(experience_label("EN"), "Junior");
        assert_eq!(experience_label("EX"), "Executive");
        assert_eq!(employment_label("FT"), "Full-time");
        assert_eq!(employment_label("FL"), "Freelance");
        assert_eq!(company_size_label("S"), "Small");
        assert_eq!(company_size_label("L"), "Large");
        assert_eq!(remote_label(0), "Office");
        assert_eq!(remote_label(50), "Hybrid");
        assert_eq!(remote_label(100), "Remote");
    }

    #[test]
    fn unknown_codes_pass_through_unchanged() {
        assert_eq!(experience_label("ZZ"), "ZZ");
        assert_eq!(employment_label("XX"), "XX");
        assert_eq!(company_size_label("XL"), "XL");
        assert_eq!(remote_label(75), "75");
    }
}

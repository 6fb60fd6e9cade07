use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lowest payroll cycle start day
pub const PAYROLL_DATE_MIN: i32 = 1;
/// Highest payroll cycle start day
pub const PAYROLL_DATE_MAX: i32 = 31;
/// Stored when the payroll date input is not a number
pub const PAYROLL_DATE_FALLBACK: i32 = 1;
/// Payroll date a fresh settings record starts with
pub const PAYROLL_DATE_DEFAULT: i32 = 28;

/// Lowest budget warning threshold (percent)
pub const BUDGET_WARNING_MIN: i32 = 50;
/// Highest budget warning threshold (percent)
pub const BUDGET_WARNING_MAX: i32 = 100;
/// Stored when the threshold input is not a number, and the initial value
pub const BUDGET_WARNING_FALLBACK: i32 = 80;

/// Display language preference.
///
/// Only picks between the two fixed message variants produced by the state
/// layer; there is no translation catalog behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Bahasa Indonesia
    #[default]
    Id,
    /// English
    En,
}

impl Language {
    /// All selectable languages in display order
    pub const ALL: [Language; 2] = [Language::Id, Language::En];

    /// Short code used by form selects ("id" / "en")
    pub fn code(&self) -> &'static str {
        match self {
            Language::Id => "id",
            Language::En => "en",
        }
    }

    /// Human-readable label for the language picker
    pub fn label(&self) -> &'static str {
        match self {
            Language::Id => "Bahasa Indonesia",
            Language::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(Language::Id),
            "en" => Ok(Language::En),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseLanguageError(pub String);

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown language code '{}' (expected 'id' or 'en')", self.0)
    }
}

impl std::error::Error for ParseLanguageError {}

/// Visual theme. The closed set the theme provider accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Pink,
    Blue,
    Green,
    Blackwhite,
}

impl Theme {
    /// All themes in picker order
    pub const ALL: [Theme; 6] = [
        Theme::Light,
        Theme::Dark,
        Theme::Pink,
        Theme::Blue,
        Theme::Green,
        Theme::Blackwhite,
    ];

    /// Value string understood by the theme provider
    pub fn value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Pink => "pink",
            Theme::Blue => "blue",
            Theme::Green => "green",
            Theme::Blackwhite => "blackwhite",
        }
    }

    /// Picker entry describing this theme
    pub fn option(&self) -> &'static ThemeOption {
        let index = match self {
            Theme::Light => 0,
            Theme::Dark => 1,
            Theme::Pink => 2,
            Theme::Blue => 3,
            Theme::Green => 4,
            Theme::Blackwhite => 5,
        };
        &THEME_OPTIONS[index]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Theme::ALL
            .iter()
            .copied()
            .find(|theme| theme.value() == value)
            .ok_or_else(|| ParseThemeError(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseThemeError(pub String);

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown theme '{}'", self.0)
    }
}

impl std::error::Error for ParseThemeError {}

/// One entry of the theme picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeOption {
    pub value: Theme,
    pub label: &'static str,
    pub description: &'static str,
}

/// Fixed, ordered theme catalog shown by the theme picker
pub static THEME_OPTIONS: [ThemeOption; 6] = [
    ThemeOption { value: Theme::Light, label: "Light", description: "Yellow & Blue" },
    ThemeOption { value: Theme::Dark, label: "Dark", description: "Dark Mode" },
    ThemeOption { value: Theme::Pink, label: "Pink", description: "Pink Theme" },
    ThemeOption { value: Theme::Blue, label: "Blue", description: "Blue Theme" },
    ThemeOption { value: Theme::Green, label: "Green", description: "Green Theme" },
    ThemeOption { value: Theme::Blackwhite, label: "B&W", description: "Pure Neobrutalist" },
];

/// Contact details collected on the profile form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub phone: String,
    pub location: String,
    /// Free text, the date input yields YYYY-MM-DD
    pub birth_date: String,
}

/// The signed-in user's profile record.
///
/// Theme and language are not stored here; the preference store owns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    /// May be empty
    pub email: String,
    /// URL or `data:` URL of the avatar image
    pub avatar: String,
    #[serde(default)]
    pub contact: ContactDetails,
    pub is_logged_in: bool,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

impl UserProfile {
    /// Generate an opaque profile ID
    pub fn generate_id() -> String {
        format!("user::{}", Uuid::new_v4())
    }

    /// Uppercased first character of the name, shown when there is no avatar
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Year the profile was created ("Member since ...")
    pub fn member_since_year(&self) -> Option<i32> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|created| created.year())
    }
}

/// Fields of the profile edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Location,
    BirthDate,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Location,
        ProfileField::BirthDate,
    ];

    /// Input id the form binds this field to
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Location => "location",
            ProfileField::BirthDate => "birthDate",
        }
    }
}

impl FromStr for ProfileField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| format!("Unknown profile field '{}'", s))
    }
}

/// Editable shadow of the profile fields shown on the edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub birth_date: String,
}

impl ProfileDraft {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.contact.phone.clone(),
            location: profile.contact.location.clone(),
            birth_date: profile.contact.birth_date.clone(),
        }
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Location => &self.location,
            ProfileField::BirthDate => &self.birth_date,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::Location => self.location = value,
            ProfileField::BirthDate => self.birth_date = value,
        }
    }
}

/// Kind of category a label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Expense,
    Income,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 2] = [CategoryKind::Expense, CategoryKind::Income];

    /// Category labels a fresh settings record starts with
    pub fn default_categories(&self) -> Vec<String> {
        let labels: &[&str] = match self {
            CategoryKind::Expense => &[
                "Bensin",
                "Internet",
                "Belanja Bulanan",
                "Hiburan",
                "Transportasi",
                "Makan",
                "Kesehatan",
            ],
            CategoryKind::Income => &["Gaji", "Freelance", "Bonus", "Investasi", "Lainnya"],
        };
        labels.iter().map(|label| label.to_string()).collect()
    }
}

/// Application settings edited on the settings screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Day of the month the budgeting period starts (1-31)
    pub payroll_date: i32,
    /// Ordered category labels per kind; duplicates are allowed here
    pub custom_subcategories: BTreeMap<CategoryKind, Vec<String>>,
    /// Percent of the budget spent before a warning shows (50-100)
    pub budget_warning_threshold: i32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            payroll_date: PAYROLL_DATE_DEFAULT,
            custom_subcategories: CategoryKind::ALL
                .iter()
                .map(|kind| (*kind, kind.default_categories()))
                .collect(),
            budget_warning_threshold: BUDGET_WARNING_FALLBACK,
        }
    }
}

impl AppSettings {
    pub fn clamp_payroll_date(day: i32) -> i32 {
        day.clamp(PAYROLL_DATE_MIN, PAYROLL_DATE_MAX)
    }

    pub fn clamp_budget_warning_threshold(percent: i32) -> i32 {
        percent.clamp(BUDGET_WARNING_MIN, BUDGET_WARNING_MAX)
    }

    /// Bring both numeric fields back into their ranges
    pub fn clamped(mut self) -> Self {
        self.payroll_date = Self::clamp_payroll_date(self.payroll_date);
        self.budget_warning_threshold = Self::clamp_budget_warning_threshold(self.budget_warning_threshold);
        self
    }

    /// Budgeting period derived from the current payroll date
    pub fn period(&self) -> PayrollPeriod {
        PayrollPeriod::from_payroll_date(self.payroll_date)
    }
}

/// A monthly budgeting period. Runs from `start_day` to `end_day` of the next month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayrollPeriod {
    pub start_day: i32,
    /// Always `start_day - 1`; a start day of 1 gives 0
    pub end_day: i32,
}

impl PayrollPeriod {
    pub fn from_payroll_date(payroll_date: i32) -> Self {
        Self {
            start_day: payroll_date,
            end_day: payroll_date.saturating_sub(1),
        }
    }

    pub fn describe(&self, language: Language) -> String {
        match language {
            Language::Id => format!(
                "Periode bulanan akan dihitung dari tanggal {} hingga tanggal {} bulan berikutnya",
                self.start_day, self.end_day
            ),
            Language::En => format!(
                "Monthly period runs from day {} to day {} of the following month",
                self.start_day, self.end_day
            ),
        }
    }
}

/// Helper text under the budget warning threshold input
pub fn describe_budget_warning(threshold: i32, language: Language) -> String {
    match language {
        Language::Id => format!(
            "Peringatan akan muncul ketika pengeluaran mencapai {}% dari budget",
            threshold
        ),
        Language::En => format!("A warning appears when spending reaches {}% of the budget", threshold),
    }
}

/// Read an integer the way a browser's `parseInt` reads a number input.
///
/// Skips leading whitespace, takes an optional sign and the leading run of
/// digits, ignores the rest. Returns `None` when there are no digits.
/// Out-of-range values saturate to the `i32` bounds.
pub fn parse_form_integer(input: &str) -> Option<i32> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digit_count == 0 {
        return None;
    }

    let magnitude = rest[..digit_count].parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };
    Some(value.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: "user::1".to_string(),
            name: "megumi".to_string(),
            email: "megumi@example.com".to_string(),
            avatar: "/professional-avatar.png".to_string(),
            contact: ContactDetails {
                phone: "0812".to_string(),
                location: "Bandung".to_string(),
                birth_date: "1999-04-01".to_string(),
            },
            is_logged_in: true,
            created_at: "2024-03-10T08:00:00+07:00".to_string(),
            updated_at: "2024-03-10T08:00:00+07:00".to_string(),
        }
    }

    #[test]
    fn test_parse_form_integer() {
        assert_eq!(parse_form_integer("28"), Some(28));
        assert_eq!(parse_form_integer("  7"), Some(7));
        assert_eq!(parse_form_integer("-5"), Some(-5));
        assert_eq!(parse_form_integer("+12"), Some(12));
        assert_eq!(parse_form_integer("12abc"), Some(12));
        assert_eq!(parse_form_integer("3.9"), Some(3));
        assert_eq!(parse_form_integer("0"), Some(0));

        assert_eq!(parse_form_integer(""), None);
        assert_eq!(parse_form_integer("abc"), None);
        assert_eq!(parse_form_integer("-"), None);
        assert_eq!(parse_form_integer(".5"), None);
    }

    #[test]
    fn test_parse_form_integer_saturates() {
        assert_eq!(parse_form_integer("99999999999999999999999"), Some(i32::MAX));
        assert_eq!(parse_form_integer("-99999999999"), Some(i32::MIN));
    }

    #[test]
    fn test_settings_clamps() {
        assert_eq!(AppSettings::clamp_payroll_date(0), 1);
        assert_eq!(AppSettings::clamp_payroll_date(15), 15);
        assert_eq!(AppSettings::clamp_payroll_date(45), 31);
        assert_eq!(AppSettings::clamp_budget_warning_threshold(10), 50);
        assert_eq!(AppSettings::clamp_budget_warning_threshold(75), 75);
        assert_eq!(AppSettings::clamp_budget_warning_threshold(150), 100);

        let settings = AppSettings {
            payroll_date: -3,
            budget_warning_threshold: 400,
            ..AppSettings::default()
        }
        .clamped();
        assert_eq!(settings.payroll_date, 1);
        assert_eq!(settings.budget_warning_threshold, 100);
    }

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.payroll_date, 28);
        assert_eq!(settings.budget_warning_threshold, 80);
        assert_eq!(settings.custom_subcategories[&CategoryKind::Expense].len(), 7);
        assert_eq!(settings.custom_subcategories[&CategoryKind::Income][0], "Gaji");
    }

    #[test]
    fn test_payroll_period_end_day() {
        let period = PayrollPeriod::from_payroll_date(28);
        assert_eq!(period.end_day, 27);

        // Day 1 is not special-cased
        let period = PayrollPeriod::from_payroll_date(1);
        assert_eq!(period.end_day, 0);

        assert_eq!(
            PayrollPeriod::from_payroll_date(28).describe(Language::Id),
            "Periode bulanan akan dihitung dari tanggal 28 hingga tanggal 27 bulan berikutnya"
        );
        assert_eq!(
            PayrollPeriod::from_payroll_date(15).describe(Language::En),
            "Monthly period runs from day 15 to day 14 of the following month"
        );
    }

    #[test]
    fn test_describe_budget_warning() {
        assert_eq!(
            describe_budget_warning(80, Language::Id),
            "Peringatan akan muncul ketika pengeluaran mencapai 80% dari budget"
        );
        assert!(describe_budget_warning(65, Language::En).contains("65%"));
    }

    #[test]
    fn test_theme_catalog_order() {
        let values: Vec<&str> = THEME_OPTIONS.iter().map(|o| o.value.value()).collect();
        assert_eq!(values, vec!["light", "dark", "pink", "blue", "green", "blackwhite"]);

        for theme in Theme::ALL {
            assert_eq!(theme.option().value, theme);
        }
        assert_eq!(Theme::Blackwhite.option().label, "B&W");
        assert_eq!(Theme::Light.option().description, "Yellow & Blue");
    }

    #[test]
    fn test_theme_and_language_parsing() {
        assert_eq!("pink".parse::<Theme>(), Ok(Theme::Pink));
        assert_eq!(" blackwhite ".parse::<Theme>(), Ok(Theme::Blackwhite));
        assert_eq!("purple".parse::<Theme>(), Err(ParseThemeError("purple".to_string())));

        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::Id.label(), "Bahasa Indonesia");
    }

    #[test]
    fn test_serde_uses_lowercase_values() {
        assert_eq!(serde_json::to_string(&Theme::Blackwhite).unwrap(), "\"blackwhite\"");
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");

        let json = serde_json::to_value(AppSettings::default()).unwrap();
        assert!(json["custom_subcategories"]["expense"].is_array());
        assert!(json["custom_subcategories"]["income"].is_array());
    }

    #[test]
    fn test_settings_yaml_fills_missing_fields() {
        let settings: AppSettings = serde_yaml::from_str("payroll_date: 25\n").unwrap();
        assert_eq!(settings.payroll_date, 25);
        assert_eq!(settings.budget_warning_threshold, 80);
        assert_eq!(settings.custom_subcategories.len(), 2);
    }

    #[test]
    fn test_draft_from_profile() {
        let profile = sample_profile();
        let draft = ProfileDraft::from_profile(&profile);
        assert_eq!(draft.name, "megumi");
        assert_eq!(draft.field(ProfileField::Phone), "0812");
        assert_eq!(draft.field(ProfileField::BirthDate), "1999-04-01");
    }

    #[test]
    fn test_draft_set_field() {
        let mut draft = ProfileDraft::default();
        draft.set_field(ProfileField::Location, "Jakarta".to_string());
        assert_eq!(draft.location, "Jakarta");
        assert_eq!("birthDate".parse::<ProfileField>(), Ok(ProfileField::BirthDate));
        assert!("nickname".parse::<ProfileField>().is_err());
    }

    #[test]
    fn test_profile_helpers() {
        let profile = sample_profile();
        assert_eq!(profile.initial(), "M");
        assert_eq!(profile.member_since_year(), Some(2024));

        let anonymous = UserProfile { name: String::new(), created_at: "garbage".to_string(), ..profile };
        assert_eq!(anonymous.initial(), "");
        assert_eq!(anonymous.member_since_year(), None);
    }

    #[test]
    fn test_generate_id_is_unique() {
        let first = UserProfile::generate_id();
        let second = UserProfile::generate_id();
        assert!(first.starts_with("user::"));
        assert_ne!(first, second);
    }
}

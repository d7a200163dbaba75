use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateConfig {
    /// First day of every region's daily count vectors.
    #[serde(default = "default_region_start")]
    pub region_start: NaiveDate,
    /// First day of the cruise-ship daily count vectors.
    #[serde(default = "default_cruise_start")]
    pub cruise_start: NaiveDate,
    /// Offset used to decide what "today" is.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            region_start: default_region_start(),
            cruise_start: default_cruise_start(),
            utc_offset_hours: default_utc_offset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CruiseConfig {
    #[serde(default = "default_passenger_pattern")]
    pub passenger_pattern: String,
    #[serde(default = "default_diamond_princess_name")]
    pub diamond_princess_name: String,
    #[serde(default = "default_nagasaki_name")]
    pub nagasaki_name: String,
}

impl Default for CruiseConfig {
    fn default() -> Self {
        Self {
            passenger_pattern: default_passenger_pattern(),
            diamond_princess_name: default_diamond_princess_name(),
            nagasaki_name: default_nagasaki_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    #[serde(default = "default_region_names")]
    pub names: Vec<String>,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            names: default_region_names(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dates: DateConfig,
    #[serde(default)]
    pub cruise: CruiseConfig,
    #[serde(default)]
    pub regions: RegionConfig,
}

fn default_region_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 8).unwrap_or_default()
}

fn default_cruise_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 2, 4).unwrap_or_default()
}

const fn default_utc_offset() -> i32 {
    9
}

fn default_passenger_pattern() -> String {
    r"(?i)diamond princess|costa atlantica|cruise ship".to_string()
}

fn default_diamond_princess_name() -> String {
    "Diamond Princess Cruise Ship".to_string()
}

fn default_nagasaki_name() -> String {
    "Nagasaki Cruise Ship".to_string()
}

fn default_region_names() -> Vec<String> {
    PREFECTURES.iter().map(|s| (*s).to_string()).collect()
}

pub const PREFECTURES: &[&str] = &[
    "Hokkaido", "Aomori", "Iwate", "Miyagi", "Akita", "Yamagata", "Fukushima",
    "Ibaraki", "Tochigi", "Gunma", "Saitama", "Chiba", "Tokyo", "Kanagawa",
    "Niigata", "Toyama", "Ishikawa", "Fukui", "Yamanashi", "Nagano", "Gifu",
    "Shizuoka", "Aichi", "Mie", "Shiga", "Kyoto", "Osaka", "Hyogo", "Nara",
    "Wakayama", "Tottori", "Shimane", "Okayama", "Hiroshima", "Yamaguchi",
    "Tokushima", "Kagawa", "Ehime", "Kochi", "Fukuoka", "Saga", "Nagasaki",
    "Kumamoto", "Oita", "Miyazaki", "Kagoshima", "Okinawa",
];

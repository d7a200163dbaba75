// tests/unit_region.rs
use casetally_core::clock::Clock;
use casetally_core::config::Config;
use casetally_core::cruise::CruiseSettings;
use casetally_core::region::{
    aggregate_regions, daily_stats_for_region, RegionCatalog, RegionSettings,
};
use casetally_core::types::{
    CruiseCountRow, PatientRecord, PatientStatus, RegionOverrideRow, RegionSummaryEntry,
};
use chrono::NaiveDate;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn settings() -> RegionSettings {
    RegionSettings {
        start: d("2020-03-01"),
        catalog: RegionCatalog::new(["Tokyo", "Osaka", "Aichi", "Hokkaido"]),
        passenger_pattern: Config::default().passenger_pattern().unwrap(),
        cruise: CruiseSettings {
            start: d("2020-03-01"),
            diamond_princess_name: "Diamond Princess Cruise Ship".to_string(),
            nagasaki_name: "Nagasaki Cruise Ship".to_string(),
        },
    }
}

fn clock() -> Clock {
    Clock::fixed(d("2020-03-05"))
}

fn patient(region: &str, date: &str) -> PatientRecord {
    PatientRecord {
        date_announced: Some(d(date)),
        prefecture: region.to_string(),
        confirmed_patient: true,
        ..Default::default()
    }
}

fn get<'a>(regions: &'a [RegionSummaryEntry], name: &str) -> &'a RegionSummaryEntry {
    regions.iter().find(|r| r.name == name).unwrap()
}

#[test]
fn test_empty_without_cruise() {
    let regions = aggregate_regions(&[], &[], None, &settings(), &clock());
    assert!(regions.is_empty());
}

#[test]
fn test_empty_cruise_rows_still_synthesize_ships() {
    let regions = aggregate_regions(&[], &[], Some(&[][..]), &settings(), &clock());
    assert_eq!(regions.len(), 2);
    for r in &regions {
        assert!(r.pseudo_prefecture);
        assert_eq!(r.daily_confirmed_count, vec![0; 5]);
        assert_eq!(r.daily_deceased_count, vec![0; 5]);
        assert_eq!(r.confirmed, 0);
    }
    assert_eq!(regions[0].name, "Diamond Princess Cruise Ship");
    assert_eq!(regions[1].name, "Nagasaki Cruise Ship");
}

#[test]
fn test_region_counts() {
    let mut with_city = patient("Tokyo", "2020-03-01");
    with_city.city_name = Some("Shinjuku".to_string());
    let mut passenger = patient("Tokyo", "2020-03-04");
    passenger.known_cluster = Some("Diamond Princess passenger".to_string());
    passenger.city_name = Some("Shinjuku".to_string());
    let unconfirmed_passenger = PatientRecord {
        confirmed_patient: false,
        known_cluster: Some("Diamond Princess".to_string()),
        ..patient("Tokyo", "2020-03-02")
    };
    let deceased_unconfirmed = PatientRecord {
        confirmed_patient: false,
        patient_status: PatientStatus::Deceased,
        deceased_date: Some(d("2020-03-03")),
        ..patient("Tokyo", "2020-03-02")
    };
    let patients = vec![
        with_city,
        passenger,
        patient("Tokyo", "2020-03-05"),
        unconfirmed_passenger,
        deceased_unconfirmed,
    ];

    let regions = aggregate_regions(&patients, &[], None, &settings(), &clock());
    assert_eq!(regions.len(), 1);
    let tokyo = &regions[0];
    assert_eq!(tokyo.confirmed, 3);
    assert_eq!(tokyo.deceased, 1);
    assert_eq!(tokyo.deaths, 1);
    assert_eq!(tokyo.cruise_passenger, 1);
    assert_eq!(tokyo.confirmed_by_city.get("Shinjuku"), Some(&2));
    assert_eq!(tokyo.confirmed_by_city.len(), 1);
    assert!(!tokyo.pseudo_prefecture);
}

#[test]
fn test_region_daily_vectors() {
    let mut dead = patient("Tokyo", "2020-03-01");
    dead.patient_status = PatientStatus::Deceased;
    dead.deceased_date = Some(d("2020-03-04"));
    let patients = vec![
        dead,
        patient("Tokyo", "2020-03-04"),
        patient("Tokyo", "2020-03-05"),
        patient("Tokyo", "2020-03-05"),
    ];
    let regions = aggregate_regions(&patients, &[], None, &settings(), &clock());
    let tokyo = get(&regions, "Tokyo");

    assert_eq!(tokyo.daily_confirmed_count, vec![1, 0, 0, 1, 2]);
    assert_eq!(tokyo.daily_deceased_count, vec![0, 0, 0, 1, 0]);
    assert_eq!(tokyo.daily_confirmed_start_date, Some(d("2020-03-01")));
    assert_eq!(tokyo.newly_confirmed, 2);
    assert_eq!(tokyo.yesterday_confirmed, 1);
    assert_eq!(tokyo.newly_deceased, 0);
    assert_eq!(tokyo.yesterday_deceased, 1);
}

#[test]
fn test_yesterday_needs_more_than_two_days() {
    let mut s = settings();
    s.start = d("2020-03-04");
    let patients = vec![patient("Osaka", "2020-03-04")];
    let regions = aggregate_regions(&patients, &[], None, &s, &clock());
    let osaka = get(&regions, "Osaka");
    assert_eq!(osaka.daily_confirmed_count, vec![1, 0]);
    assert_eq!(osaka.newly_confirmed, 0);
    assert_eq!(osaka.yesterday_confirmed, 0);
}

#[test]
fn test_sort_descending_ties_keep_insertion_order() {
    let mut patients = Vec::new();
    for (region, count) in [("Tokyo", 5), ("Osaka", 10), ("Aichi", 10), ("Hokkaido", 2)] {
        for _ in 0..count {
            patients.push(patient(region, "2020-03-02"));
        }
    }
    let regions = aggregate_regions(&patients, &[], None, &settings(), &clock());
    let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Osaka", "Aichi", "Tokyo", "Hokkaido"]);
}

#[test]
fn test_pseudo_region_flag() {
    let patients = vec![patient("Unspecified", "2020-03-01"), patient("Tokyo", "2020-03-01")];
    let regions = aggregate_regions(&patients, &[], None, &settings(), &clock());
    assert!(get(&regions, "Unspecified").pseudo_prefecture);
    assert!(!get(&regions, "Tokyo").pseudo_prefecture);

    let json = serde_json::to_value(get(&regions, "Tokyo")).unwrap();
    assert!(json.get("pseudoPrefecture").is_none());
    let json = serde_json::to_value(get(&regions, "Unspecified")).unwrap();
    assert_eq!(json["pseudoPrefecture"], true);
}

#[test]
fn test_blank_region_kept_verbatim() {
    let regions = aggregate_regions(&[patient("", "2020-03-01")], &[], None, &settings(), &clock());
    assert_eq!(regions[0].name, "");
    assert!(regions[0].pseudo_prefecture);
}

#[test]
fn test_overrides_apply_to_known_regions_only() {
    let patients = vec![patient("Tokyo", "2020-03-01")];
    let overrides = vec![
        RegionOverrideRow {
            prefecture: "Tokyo".to_string(),
            recovered: Some("7".to_string()),
            prefecture_ja: Some("東京都".to_string()),
        },
        RegionOverrideRow {
            prefecture: "Atlantis".to_string(),
            recovered: Some("3".to_string()),
            prefecture_ja: None,
        },
    ];
    let regions = aggregate_regions(&patients, &overrides, None, &settings(), &clock());
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].recovered, 7);
    assert_eq!(regions[0].name_ja.as_deref(), Some("東京都"));
}

#[test]
fn test_cruise_entries_overwrite_patient_region() {
    let patients = vec![
        patient("Diamond Princess Cruise Ship", "2020-03-01"),
        patient("Tokyo", "2020-03-01"),
    ];
    let cruise = vec![CruiseCountRow {
        date: Some(d("2020-03-02")),
        dp_confirmed: Some("40".to_string()),
        ..Default::default()
    }];
    let regions = aggregate_regions(&patients, &[], Some(cruise.as_slice()), &settings(), &clock());

    assert_eq!(regions.len(), 3);
    let ship = get(&regions, "Diamond Princess Cruise Ship");
    assert_eq!(ship.confirmed, 40);
    assert_eq!(ship.daily_confirmed_count, vec![0, 40, 0, 0, 0]);
    assert!(ship.pseudo_prefecture);
    assert_eq!(regions[0].name, "Diamond Princess Cruise Ship");
}

#[test]
fn test_output_has_no_patient_lists() {
    let regions = aggregate_regions(&[patient("Tokyo", "2020-03-01")], &[], None, &settings(), &clock());
    let json = serde_json::to_value(&regions[0]).unwrap();
    assert!(json.get("patients").is_none());
}

#[test]
fn test_daily_stats_start_after_today() {
    let p = patient("Tokyo", "2020-03-01");
    let stats = daily_stats_for_region(&[&p], d("2020-04-01"), &clock());
    assert!(stats.confirmed.is_empty());
    assert!(stats.deaths.is_empty());
}

#[test]
fn test_daily_stats_ignores_out_of_range_dates() {
    let early = patient("Tokyo", "2020-02-01");
    let late = patient("Tokyo", "2020-06-01");
    let inside = patient("Tokyo", "2020-03-03");
    let stats = daily_stats_for_region(&[&early, &late, &inside], d("2020-03-01"), &clock());
    assert_eq!(stats.confirmed, vec![0, 0, 1, 0, 0]);
    assert_eq!(stats.deaths, vec![0; 5]);
}

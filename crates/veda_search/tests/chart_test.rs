//! Integration tests for chart and dasha orchestration.

use veda_ephem::{
    AnalyticEphemeris, AyanamshaSystem, EphemerisError, HouseSystem, ProviderConfig,
};
use veda_search::{
    BirthData, ChartConfig, SearchError, birth_jd, calculate_chart, dasha_for_birth,
    mahadashas_for_birth,
};
use veda_vedic_base::{ALL_GRAHAS, Graha, normalize_360};

fn delhi_1990() -> BirthData {
    BirthData::new(1990, 1, 15, 10, 30, 28.6139, 77.2090)
}

fn config_at(reference_jd: f64) -> ChartConfig {
    ChartConfig {
        dasha_reference_jd: Some(reference_jd),
        ..ChartConfig::default()
    }
}

#[test]
fn birth_jd_applies_ist_offset() {
    let eph = AnalyticEphemeris::default();
    let jd = birth_jd(&eph, &delhi_1990(), &ChartConfig::default()).unwrap();
    // 10:30 IST = 05:00 UT.
    let expected = 2_447_906.5 + 5.0 / 24.0;
    assert!((jd - expected).abs() < 1e-9, "jd = {jd}");
}

#[test]
fn chart_entries_are_in_range() {
    let eph = AnalyticEphemeris::default();
    let chart = calculate_chart(&eph, &delhi_1990(), &config_at(2_451_545.0)).unwrap();

    for entry in chart.grahas.iter().chain(std::iter::once(&chart.lagna)) {
        assert!((0.0..360.0).contains(&entry.sidereal_longitude));
        assert!(entry.rashi_index < 12);
        assert!(entry.nakshatra_index < 27);
        assert!((1..=4).contains(&entry.pada));
        assert!((0.0..30.0).contains(&entry.degrees_in_rashi));
        assert_eq!(entry.rashi.index(), entry.rashi_index);
    }
    assert!((chart.ayanamsha - 23.72).abs() < 0.05);
}

#[test]
fn ketu_opposes_rahu() {
    let eph = AnalyticEphemeris::default();
    let chart = calculate_chart(&eph, &delhi_1990(), &config_at(2_451_545.0)).unwrap();
    let rahu = chart.graha(Graha::Rahu).sidereal_longitude;
    let ketu = chart.graha(Graha::Ketu).sidereal_longitude;
    assert!((normalize_360(rahu + 180.0) - ketu).abs() < 1e-9);
    assert_eq!(
        (chart.graha(Graha::Rahu).rashi_index + 6) % 12,
        chart.graha(Graha::Ketu).rashi_index
    );
}

#[test]
fn lagna_never_negative() {
    let eph = AnalyticEphemeris::default();
    for hour in (0..24).step_by(3) {
        for lat in [-66.0, -33.9, 0.0, 19.07, 51.5, 66.0] {
            for lon in [-122.4, 0.0, 77.2, 151.2] {
                let birth = BirthData::new(1985, 6, 21, hour, 15, lat, lon);
                let chart = calculate_chart(&eph, &birth, &config_at(2_451_545.0)).unwrap();
                let lagna = chart.lagna.sidereal_longitude;
                assert!((0.0..360.0).contains(&lagna), "{hour}h {lat} {lon}: {lagna}");
                assert!(chart.cusps.iter().all(|c| (0.0..360.0).contains(c)));
            }
        }
    }
}

#[test]
fn equal_house_cusps_step_by_thirty() {
    let eph = AnalyticEphemeris::default();
    let chart = calculate_chart(&eph, &delhi_1990(), &config_at(2_451_545.0)).unwrap();
    assert!((chart.cusps[0] - chart.lagna.sidereal_longitude).abs() < 1e-9);
    for i in 1..12 {
        let step = normalize_360(chart.cusps[i] - chart.cusps[i - 1]);
        assert!((step - 30.0).abs() < 1e-9, "cusp {i}: {step}");
    }
}

#[test]
fn porphyry_keeps_lagna() {
    let equal = AnalyticEphemeris::default();
    let porphyry = AnalyticEphemeris::new(ProviderConfig {
        house_system: HouseSystem::Porphyry,
        ..ProviderConfig::default()
    });
    let a = calculate_chart(&equal, &delhi_1990(), &config_at(2_451_545.0)).unwrap();
    let b = calculate_chart(&porphyry, &delhi_1990(), &config_at(2_451_545.0)).unwrap();
    assert!((a.lagna.sidereal_longitude - b.lagna.sidereal_longitude).abs() < 1e-9);
    assert_eq!(a.grahas, b.grahas);
}

#[test]
fn ayanamsha_choice_shifts_every_graha() {
    let lahiri = AnalyticEphemeris::default();
    let fagan = AnalyticEphemeris::new(ProviderConfig::with_ayanamsha(
        AyanamshaSystem::FaganBradley,
    ));
    let a = calculate_chart(&lahiri, &delhi_1990(), &config_at(2_451_545.0)).unwrap();
    let b = calculate_chart(&fagan, &delhi_1990(), &config_at(2_451_545.0)).unwrap();
    let shift = b.ayanamsha - a.ayanamsha;
    assert!(shift.abs() > 0.5);
    for g in ALL_GRAHAS {
        let d = normalize_360(a.graha(g).sidereal_longitude - b.graha(g).sidereal_longitude);
        assert!((d - shift).abs() < 1e-6, "{g}: {d} vs {shift}");
    }
}

#[test]
fn invalid_birth_inputs() {
    let eph = AnalyticEphemeris::default();
    let config = config_at(2_451_545.0);
    let bad_month = BirthData::new(1990, 13, 1, 0, 0, 0.0, 0.0);
    let bad_hour = BirthData::new(1990, 1, 1, 24, 0, 0.0, 0.0);
    let bad_lat = BirthData::new(1990, 1, 1, 0, 0, 95.0, 0.0);
    let bad_lon = BirthData::new(1990, 1, 1, 0, 0, 0.0, 181.0);
    for birth in [bad_month, bad_hour, bad_lat, bad_lon] {
        assert!(
            matches!(
                calculate_chart(&eph, &birth, &config),
                Err(SearchError::InvalidInput(_))
            ),
            "{birth:?}"
        );
    }
}

#[test]
fn epoch_outside_provider_range() {
    let eph = AnalyticEphemeris::default();
    let birth = BirthData::new(1700, 6, 1, 12, 0, 28.6, 77.2);
    assert!(matches!(
        calculate_chart(&eph, &birth, &config_at(2_451_545.0)),
        Err(SearchError::Ephemeris(EphemerisError::EpochOutOfRange { .. }))
    ));
}

#[test]
fn reference_before_birth_reports_birth_dasha() {
    let eph = AnalyticEphemeris::default();
    let early = calculate_chart(&eph, &delhi_1990(), &config_at(2_440_000.5)).unwrap();
    let at_birth = calculate_chart(&eph, &delhi_1990(), &config_at(early.jd_ut)).unwrap();
    assert_eq!(early.dasha, at_birth.dasha);
    assert_eq!(
        early.dasha.mahadasha.lord,
        early.graha(Graha::Chandra).nakshatra.lord()
    );
}

#[test]
fn future_birth_uses_default_reference() {
    let eph = AnalyticEphemeris::default();
    let birth = BirthData::new(2040, 6, 1, 12, 0, 28.6, 77.2);
    let chart = calculate_chart(&eph, &birth, &ChartConfig::default()).unwrap();
    assert_eq!(chart.dasha.mahadasha.start_jd, chart.jd_ut);
    assert_eq!(
        chart.dasha.mahadasha.lord,
        chart.graha(Graha::Chandra).nakshatra.lord()
    );
}

#[test]
fn dasha_agrees_with_chart() {
    let eph = AnalyticEphemeris::default();
    let config = config_at(2_455_000.5);
    let chart = calculate_chart(&eph, &delhi_1990(), &config).unwrap();
    let dasha = dasha_for_birth(&eph, &delhi_1990(), &config).unwrap();
    assert_eq!(chart.dasha, dasha);
    assert!(dasha.antardasha.contains(2_455_000.5));
    assert!(dasha.mahadasha.start_jd <= 2_455_000.5 && 2_455_000.5 < dasha.mahadasha.end_jd);
}

#[test]
fn mahadashas_start_at_birth() {
    let eph = AnalyticEphemeris::default();
    let config = ChartConfig::default();
    let jd = birth_jd(&eph, &delhi_1990(), &config).unwrap();
    let periods = mahadashas_for_birth(&eph, &delhi_1990(), &config).unwrap();
    assert_eq!(periods.len(), 9);
    assert!((periods[0].start_jd - jd).abs() < 1e-9);
    for pair in periods.windows(2) {
        assert!((pair[0].end_jd - pair[1].start_jd).abs() < 1e-9);
    }
    let moon = calculate_chart(&eph, &delhi_1990(), &config_at(jd)).unwrap();
    assert_eq!(periods[0].lord, moon.graha(Graha::Chandra).nakshatra.lord());
}

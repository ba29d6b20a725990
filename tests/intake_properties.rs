use chrono::{Days, NaiveDate};
use pawfeed::feeding::{
    age_in_months, current_intake_percent_on, daily_intake_grams, intake_decision_on,
    is_effective_puppy_mode_on, puppy_intake_percent, IntakeSource,
};
use pawfeed::models::{BirthDate, DogProfile};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fn date_from(offset_days: u32) -> NaiveDate {
    epoch() + Days::new(offset_days as u64)
}

fn birth_date() -> impl Strategy<Value = BirthDate> {
    prop_oneof![
        1 => Just(BirthDate::Unknown),
        6 => (0_u32..10_000).prop_map(|d| BirthDate::Known(date_from(d))),
    ]
}

fn profile() -> impl Strategy<Value = DogProfile> {
    (
        birth_date(),
        prop::option::of(any::<bool>()),
        prop::option::of(prop_oneof![-5.0_f64..20.0, Just(f64::NAN)]),
    )
        .prop_map(|(dob, flag, manual)| DogProfile {
            name: None,
            date_of_birth: dob,
            use_puppy_guidelines: flag,
            manual_intake_ratio: manual,
        })
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn age_is_monotone_as_today_advances(
        dob in 0_u32..8_000,
        start in 0_u32..3_000,
        step in 0_u32..800
    ) {
        let birth = BirthDate::Known(date_from(dob));
        let earlier = date_from(dob + start);
        let later = date_from(dob + start + step);
        let a = age_in_months(&birth, earlier).unwrap();
        let b = age_in_months(&birth, later).unwrap();
        prop_assert!(a <= b);
    }

    #[test]
    fn age_on_birth_day_is_zero(dob in 0_u32..10_000) {
        let date = date_from(dob);
        prop_assert_eq!(age_in_months(&BirthDate::Known(date), date), Some(0));
    }

    #[test]
    fn intake_percent_is_finite_and_positive(p in profile(), today in 0_u32..12_000) {
        let percent = current_intake_percent_on(&p, date_from(today));
        prop_assert!(percent.is_finite());
        prop_assert!(percent > 0.0);
    }

    #[test]
    fn puppy_mode_matches_guideline_branch(p in profile(), today in 0_u32..12_000) {
        let today = date_from(today);
        let decision = intake_decision_on(&p, today);
        let puppy_mode = is_effective_puppy_mode_on(&p, today);

        prop_assert_eq!(puppy_mode, decision.source == IntakeSource::PuppyGuideline);
        if puppy_mode {
            prop_assert_eq!(Some(decision.percent), puppy_intake_percent(decision.age_months));
        }
    }

    #[test]
    fn grams_scale_with_weight(weight in 0.0_f64..90.0, percent in 0.5_f64..12.0) {
        let grams = daily_intake_grams(Some(weight), Some(percent));
        let exact = weight * 1000.0 * percent / 100.0;
        prop_assert!((grams as f64 - exact).abs() <= 0.5);
    }
}

#[test]
fn scenarios() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

    let thirteen_months = DogProfile::new(NaiveDate::from_ymd_opt(2025, 9, 18).unwrap())
        .with_manual_intake_ratio(5.0);
    assert_eq!(current_intake_percent_on(&thirteen_months, today), 2.5);

    let three_months = DogProfile::new(BirthDate::parse("2026-07-18"));
    assert_eq!(current_intake_percent_on(&three_months, today), 10.0);

    let opted_out = three_months
        .clone()
        .with_puppy_guidelines(false)
        .with_manual_intake_ratio(7.0);
    assert_eq!(current_intake_percent_on(&opted_out, today), 7.0);

    let unknown = DogProfile::new(BirthDate::parse("no idea")).with_manual_intake_ratio(6.0);
    assert_eq!(current_intake_percent_on(&unknown, today), 6.0);
    assert_eq!(current_intake_percent_on(&DogProfile::default(), today), 2.5);

    assert_eq!(daily_intake_grams(Some(10.0), Some(2.5)), 250);
    assert_eq!(daily_intake_grams(None, Some(2.5)), 0);
    assert_eq!(daily_intake_grams(Some(10.0), None), 0);
}

#[test]
fn one_year_on_same_day_is_twelve_months() {
    let birth = BirthDate::parse("2025-10-18");
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    assert_eq!(age_in_months(&birth, today), Some(12));
}

// core/tests/test_classifier.rs
use trackgraph_core::classifier::{classify, SLOPE_BREAKPOINTS_PCT, SPEED_BREAKPOINTS_KMH};
use trackgraph_core::{SlopeZone, SpeedZone};

#[test]
fn speed_zones_follow_breakpoints() {
    let bp = SPEED_BREAKPOINTS_KMH;
    assert_eq!(SpeedZone::classify(0.0, &bp), SpeedZone::VerySlow);
    assert_eq!(SpeedZone::classify(1.0, &bp), SpeedZone::VerySlow);
    assert_eq!(SpeedZone::classify(3.0, &bp), SpeedZone::Slow);
    assert_eq!(SpeedZone::classify(5.0, &bp), SpeedZone::Medium);
    assert_eq!(SpeedZone::classify(7.0, &bp), SpeedZone::Fast);
    assert_eq!(SpeedZone::classify(250.0, &bp), SpeedZone::Fast);
}

#[test]
fn value_on_breakpoint_goes_to_higher_zone() {
    let bp = SPEED_BREAKPOINTS_KMH;
    assert_eq!(SpeedZone::classify(2.0, &bp), SpeedZone::Slow);
    assert_eq!(SpeedZone::classify(4.0, &bp), SpeedZone::Medium);
    assert_eq!(SpeedZone::classify(6.0, &bp), SpeedZone::Fast);

    let sp = SLOPE_BREAKPOINTS_PCT;
    assert_eq!(SlopeZone::classify(-8.0, &sp), SlopeZone::Decline);
    assert_eq!(SlopeZone::classify(-1.0, &sp), SlopeZone::Flat);
    assert_eq!(SlopeZone::classify(1.0, &sp), SlopeZone::GentleIncline);
    assert_eq!(SlopeZone::classify(8.0, &sp), SlopeZone::SteepIncline);
}

#[test]
fn slope_zones_cover_all_seven_categories() {
    let sp = SLOPE_BREAKPOINTS_PCT;
    let got: Vec<SlopeZone> = [-20.0, -5.0, -2.0, 0.0, 2.0, 5.0, 20.0]
        .iter()
        .map(|v| SlopeZone::classify(*v, &sp))
        .collect();
    assert_eq!(got, SlopeZone::ALL.to_vec());
    // rekkefølgen er eksplisitt
    assert!(SlopeZone::SteepDecline < SlopeZone::Flat);
    assert_eq!(SlopeZone::Flat.ordinal(), 3);
}

#[test]
fn invalid_values_map_to_neutral_zone() {
    assert_eq!(SpeedZone::classify(f64::NAN, &SPEED_BREAKPOINTS_KMH), SpeedZone::NEUTRAL);
    assert_eq!(SlopeZone::classify(f64::INFINITY, &SLOPE_BREAKPOINTS_PCT), SlopeZone::Flat);
    assert_eq!(classify(f64::NEG_INFINITY, &SPEED_BREAKPOINTS_KMH, 4), None);
}

#[test]
fn custom_breakpoints_are_respected() {
    let bp = [5.0, 10.0, 15.0];
    assert_eq!(SpeedZone::classify(7.0, &bp), SpeedZone::Slow);
    assert_eq!(SpeedZone::classify(15.0, &bp), SpeedZone::Fast);
}

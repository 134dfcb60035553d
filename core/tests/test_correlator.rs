// core/tests/test_correlator.rs
use trackgraph_core::correlator::ViewKind;
use trackgraph_core::{
    index_samples, parse_samples, resolve, resolve_point, ChartSeries, IndexedView, Sample, SelectionKey,
    ViewPoint,
};

fn track() -> Vec<Sample> {
    let elev = [100.0, 104.0, 0.0, 110.0, 110.0, 112.0];
    let dist = [0.0, 20.0, 40.0, 60.0, 60.0, 80.0]; // 3 og 4 deler distanse (stillstand)
    (0..elev.len())
        .map(|i| Sample {
            index: i,
            timestamp_ms: i as i64 * 5000,
            latitude: if i == 1 { 0.0 } else { 60.0 + i as f64 * 0.001 },
            longitude: if i == 1 { 0.0 } else { 10.0 + i as f64 * 0.001 },
            distance_m: dist[i],
            elevation_m: elev[i],
            speed_kmh: 4.0,
            ..Default::default()
        })
        .collect()
}

#[test]
fn chart_selection_resolves_to_map_sample() {
    let samples = track();
    let chart = IndexedView::distance_chart(&samples, ChartSeries::Elevation);
    let map = IndexedView::map(&samples);

    // sample 2 mangler høyde og vises ikke i grafen
    assert_eq!(chart.len(), 5);
    assert!(!chart.contains(2));
    // sample 1 mangler posisjon og vises ikke på kartet
    assert_eq!(map.len(), 5);
    assert!(!map.contains(1));

    let entry = chart.point_for(3).copied().unwrap();
    let hit = resolve(SelectionKey::from(&entry), &chart, &map).expect("sample 3 er på kartet");
    assert_eq!(hit.index, 3);
}

#[test]
fn shared_x_values_stay_unambiguous() {
    let samples = track();
    let chart = IndexedView::distance_chart(&samples, ChartSeries::Elevation);
    let map = IndexedView::map(&samples);

    let p3 = chart.point_for(3).copied().unwrap();
    let p4 = chart.point_for(4).copied().unwrap();
    assert_eq!(p3.x, p4.x);

    assert_eq!(resolve(SelectionKey::from(&p3), &chart, &map).unwrap().index, 3);
    assert_eq!(resolve(SelectionKey::from(&p4), &chart, &map).unwrap().index, 4);
}

#[test]
fn resolution_round_trips() {
    let samples = track();
    let chart = IndexedView::distance_chart(&samples, ChartSeries::Elevation);
    let map = IndexedView::map(&samples);

    for p in chart.points() {
        let key = SelectionKey::from(p);
        if let Some(on_map) = resolve_point(key, &chart, &map) {
            let back = resolve(SelectionKey::from(on_map), &map, &chart).unwrap();
            assert_eq!(back.index, key.sample_index);
        }
    }
}

#[test]
fn missing_in_either_view_gives_none() {
    let samples = track();
    let chart = IndexedView::distance_chart(&samples, ChartSeries::Elevation);
    let map = IndexedView::map(&samples);

    // finnes ikke i primærvisningen
    assert!(resolve(SelectionKey { sample_index: 2 }, &chart, &map).is_none());
    // finnes ikke i sekundærvisningen
    assert!(resolve(SelectionKey { sample_index: 1 }, &chart, &map).is_none());
    // utenfor sporet
    assert!(resolve(SelectionKey { sample_index: 99 }, &chart, &map).is_none());
}

#[test]
fn custom_view_drops_unknown_indices() {
    let samples = track();
    let points = vec![
        ViewPoint { x: 0.0, y: 1.0, sample_index: 0 },
        ViewPoint { x: 1.0, y: 2.0, sample_index: 42 },
    ];
    let view = IndexedView::new(ViewKind::Custom, &samples, points);
    assert_eq!(view.len(), 1);
    assert_eq!(view.kind(), ViewKind::Custom);
    assert_eq!(view.sample_for(0).map(|s| s.index), Some(0));
}

#[test]
fn works_on_non_zero_based_slices() {
    let samples = track();
    let tail = &samples[2..];
    let chart = IndexedView::distance_chart(tail, ChartSeries::Speed);
    let map = IndexedView::map(tail);
    let hit = resolve(SelectionKey { sample_index: 5 }, &chart, &map).unwrap();
    assert_eq!(hit.index, 5);
    assert_eq!(hit.distance_m, 80.0);
}

#[test]
fn json_samples_without_index_get_positions() {
    let txt = r#"[
        {"time": 0,     "lat": 60.000, "lon": 10.000, "dist": 0.0,  "alt": 100.0},
        {"time": 1000,  "lat": 60.001, "lon": 10.001, "dist": 10.0, "alt": 101.0},
        {"time": 2000,  "lat": 60.002, "lon": 10.002, "dist": 20.0, "alt": 102.0}
    ]"#;
    let samples = parse_samples(txt).unwrap();
    let indices: Vec<usize> = samples.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);

    let chart = IndexedView::distance_chart(&samples, ChartSeries::Elevation);
    let map = IndexedView::map(&samples);
    let hit = resolve(SelectionKey { sample_index: 0 }, &chart, &map).unwrap();
    assert_eq!(hit.distance_m, 0.0);
}

#[test]
fn unique_indices_are_kept_and_duplicates_renumbered() {
    let mut samples = track();
    for s in samples.iter_mut() {
        s.index += 100;
    }
    assert!(!index_samples(&mut samples));
    assert_eq!(samples[0].index, 100);

    samples[1].index = 100;
    assert!(index_samples(&mut samples));
    let indices: Vec<usize> = samples.iter().map(|s| s.index).collect();
    assert_eq!(indices, (0..samples.len()).collect::<Vec<_>>());
}

#[test]
fn sparse_and_extreme_indices_do_not_panic() {
    let mut samples = track();
    samples[0].index = usize::MAX;
    samples[3].index = usize::MAX - 1;
    samples[5].index = 4_000_000_000;

    let chart = IndexedView::distance_chart(&samples, ChartSeries::Elevation);
    let map = IndexedView::map(&samples);
    assert!(map.contains(usize::MAX));

    let hit = resolve(SelectionKey { sample_index: usize::MAX }, &chart, &map).unwrap();
    assert_eq!(hit.distance_m, 0.0);
    let hit = resolve(SelectionKey { sample_index: 4_000_000_000 }, &chart, &map).unwrap();
    assert_eq!(hit.distance_m, 80.0);
}

// Property tests for every algorithm in the catalog

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortty::dataset::{is_sorted_range, paint, Bar, Preset, Tint};
use sortty::instrument::{Probe, StepCounter, StepEvent};
use sortty::sorting::{run_sort, Algorithm, SortError};

fn bars(pairs: &[(u32, u32)]) -> Vec<Bar> {
    pairs.iter().map(|&(v, c)| Bar::new(v, Tint(c))).collect()
}

fn sorted_values(data: &[Bar]) -> Vec<u32> {
    let mut values: Vec<u32> = data.iter().map(|b| b.value).collect();
    values.sort_unstable();
    values
}

/// Random datasets of assorted lengths, including duplicates
fn datasets(seed: u64) -> Vec<Vec<Bar>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::new();
    for len in [1usize, 2, 3, 5, 10, 17, 64] {
        for _ in 0..4 {
            let values: Vec<u32> = (0..len).map(|_| rng.gen_range(0..20)).collect();
            out.push(paint(&values));
        }
    }
    for preset in Preset::ALL {
        out.push(preset.generate(&mut rng));
    }
    out
}

#[test]
fn test_every_algorithm_sorts_whole_range() {
    for algorithm in Algorithm::ALL {
        for data in datasets(11) {
            let mut sorted = data.clone();
            let high = sorted.len() - 1;
            let mut probe = Probe::new(StepCounter::new());
            algorithm.sort(&mut sorted, 0, high, &mut probe);

            assert!(
                is_sorted_range(&sorted, 0, high),
                "{} left {:?} unsorted",
                algorithm,
                sorted
            );
            assert_eq!(
                sorted_values(&sorted),
                sorted_values(&data),
                "{} changed the multiset of values",
                algorithm
            );
        }
    }
}

#[test]
fn test_subrange_sorts_and_leaves_outside_untouched() {
    let mut rng = StdRng::seed_from_u64(5);
    for algorithm in Algorithm::ALL {
        for _ in 0..20 {
            let len = rng.gen_range(2..30);
            let values: Vec<u32> = (0..len).map(|_| rng.gen_range(0..50)).collect();
            let data = paint(&values);
            let low = rng.gen_range(0..len);
            let high = rng.gen_range(low..len);

            let mut sorted = data.clone();
            let mut probe = Probe::new(StepCounter::new());
            algorithm.sort(&mut sorted, low, high, &mut probe);

            assert_eq!(&sorted[..low], &data[..low], "{} touched below low", algorithm);
            assert_eq!(&sorted[high + 1..], &data[high + 1..], "{} touched above high", algorithm);
            assert!(is_sorted_range(&sorted, low, high), "{} [{}, {}]", algorithm, low, high);
            assert_eq!(
                sorted_values(&sorted[low..=high]),
                sorted_values(&data[low..=high])
            );
        }
    }
}

#[test]
fn test_empty_range_is_a_no_op() {
    let data = paint(&[4, 2, 9, 1, 7]);
    for algorithm in Algorithm::ALL {
        for k in 1..=data.len() {
            let mut copy = data.clone();
            let counter = StepCounter::new();
            let mut probe = Probe::new(counter.clone());
            algorithm.sort(&mut copy, k, k - 1, &mut probe);
            assert_eq!(copy, data);
            assert_eq!(counter.get(), 0, "{} counted steps on an empty range", algorithm);
        }
    }
}

#[test]
fn test_single_element_range_takes_no_steps() {
    for algorithm in Algorithm::ALL {
        let mut data = paint(&[3, 2, 1]);
        let mut probe = Probe::new(StepCounter::new());
        algorithm.sort(&mut data, 1, 1, &mut probe);
        assert_eq!(data, paint(&[3, 2, 1]));
        assert_eq!(probe.steps(), 0, "{}", algorithm);
    }
}

#[test]
fn test_steps_grow_monotonically_and_events_are_ordered() {
    for algorithm in Algorithm::ALL {
        for data in datasets(23).into_iter().filter(|d| d.len() > 1) {
            let mut sorted = data.clone();
            let mut events: Vec<StepEvent> = Vec::new();
            let counter = StepCounter::new();
            {
                let mut probe = Probe::with_observer(counter.clone(), &mut events);
                let high = sorted.len() - 1;
                algorithm.sort(&mut sorted, 0, high, &mut probe);
            }

            assert!(counter.get() > 0, "{} took no steps", algorithm);
            assert_eq!(events.len() as u64, counter.get());
            for (i, event) in events.iter().enumerate() {
                assert_eq!(event.step, i as u64 + 1);
            }
        }
    }
}

#[test]
fn test_replaying_events_reproduces_the_result() {
    for algorithm in Algorithm::ALL {
        for data in datasets(31) {
            let mut sorted = data.clone();
            let mut events: Vec<StepEvent> = Vec::new();
            {
                let mut probe = Probe::with_observer(StepCounter::new(), &mut events);
                let high = sorted.len() - 1;
                algorithm.sort(&mut sorted, 0, high, &mut probe);
            }

            let mut mirror = data.clone();
            for event in &events {
                event.apply(&mut mirror);
            }
            assert_eq!(mirror, sorted, "{} events do not replay to the result", algorithm);
        }
    }
}

#[test]
fn test_color_travels_with_value() {
    let mut rng = StdRng::seed_from_u64(99);
    for algorithm in Algorithm::ALL {
        let data = Preset::Random.generate(&mut rng);
        let mut sorted = data.clone();
        let mut probe = Probe::new(StepCounter::new());
        algorithm.sort(&mut sorted, 0, 9, &mut probe);

        for bar in &sorted {
            let original = data
                .iter()
                .find(|b| b.value == bar.value)
                .expect("value appeared from nowhere");
            assert_eq!(original.color, bar.color, "{} split a bar", algorithm);
        }
    }
}

#[test]
fn test_bubble_scenario() {
    let mut data = bars(&[(5, 0xa), (3, 0xb), (4, 0xc), (1, 0xd), (2, 0xe)]);
    let counter = StepCounter::new();
    let mut probe = Probe::new(counter.clone());

    let algorithm = run_sort(0, &mut data, 0, 4, &mut probe).expect("valid selection");

    assert_eq!(algorithm, Algorithm::Bubble);
    assert_eq!(
        data,
        bars(&[(1, 0xd), (2, 0xe), (3, 0xb), (4, 0xc), (5, 0xa)])
    );
    assert_eq!(counter.get(), 10);
}

#[test]
fn test_insertion_scenario_on_sorted_input() {
    let input = bars(&[(1, 0x1), (2, 0x2), (3, 0x3)]);
    let mut data = input.clone();
    let counter = StepCounter::new();
    let mut probe = Probe::new(counter.clone());

    run_sort(Algorithm::Insertion.index(), &mut data, 0, 2, &mut probe).expect("valid selection");

    assert_eq!(data, input);
    assert_eq!(counter.get(), 2);
}

#[test]
fn test_invalid_selection_changes_nothing() {
    let input = bars(&[(5, 0xa), (3, 0xb), (4, 0xc), (1, 0xd), (2, 0xe)]);
    let mut data = input.clone();
    let counter = StepCounter::new();
    let mut probe = Probe::new(counter.clone());

    let result = run_sort(10, &mut data, 0, 4, &mut probe);

    assert_eq!(result, Err(SortError::InvalidSelection { index: 10 }));
    assert_eq!(data, input);
    assert_eq!(counter.get(), 0);
}

#[test]
fn test_selection_and_exchange_are_distinct() {
    // Exchange counts every pair; Selection adds a step only for real swaps
    let values = [1, 2, 3, 4, 5];
    let mut a = paint(&values);
    let mut b = paint(&values);
    let mut selection = Probe::new(StepCounter::new());
    let mut exchange = Probe::new(StepCounter::new());
    Algorithm::Selection.sort(&mut a, 0, 4, &mut selection);
    Algorithm::Exchange.sort(&mut b, 0, 4, &mut exchange);
    assert_eq!(selection.steps(), 10);
    assert_eq!(exchange.steps(), 10);

    let mut a = paint(&[2, 1, 3]);
    let mut b = paint(&[2, 1, 3]);
    let mut selection = Probe::new(StepCounter::new());
    let mut exchange = Probe::new(StepCounter::new());
    Algorithm::Selection.sort(&mut a, 0, 2, &mut selection);
    Algorithm::Exchange.sort(&mut b, 0, 2, &mut exchange);
    assert_eq!(selection.steps(), 4);
    assert_eq!(exchange.steps(), 3);
}

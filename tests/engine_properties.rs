use chrono::{Duration, NaiveDate};

use indicator_engine::{PricePoint, compute_indicators};

fn points(prices: &[f64]) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| PricePoint::new(start + Duration::days(i as i64), p))
        .collect()
}

fn random_walk(n: usize) -> Vec<f64> {
    // fixed LCG so the walk is reproducible
    let mut state: u64 = 42;
    let mut price = 28000.0;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let step = ((state >> 33) as f64 / (1u64 << 31) as f64) - 0.5;
            price += step * 300.0;
            price
        })
        .collect()
}

#[test]
fn test_output_length_matches_input() {
    for n in [0, 1, 2, 19, 20, 49, 50, 199, 200, 250] {
        assert_eq!(compute_indicators(&points(&random_walk(n))).len(), n);
    }
}

#[test]
fn test_bands_are_symmetric_around_middle() {
    for p in compute_indicators(&points(&random_walk(120))) {
        if let (Some(up), Some(mid), Some(low)) = (p.bollinger_upper, p.bollinger_middle, p.bollinger_lower) {
            assert!(((up - mid) - (mid - low)).abs() < 1e-6);
            assert!(up >= mid && mid >= low);
        }
    }
}

#[test]
fn test_short_average_is_mean_of_last_twenty() {
    let prices = random_walk(80);
    let out = compute_indicators(&points(&prices));
    for i in 19..80 {
        let expected = prices[i - 19..=i].iter().sum::<f64>() / 20.0;
        assert!((out[i].ema20.unwrap() - expected).abs() < 1e-6, "ema20 at {i}");
    }
}

#[test]
fn test_estimated_opens_never_reverse() {
    // with open = 0.99 * close every change is positive
    let out = compute_indicators(&points(&random_walk(30)));
    assert!(out[1..].iter().all(|p| p.bullish == Some(true) && p.reversal == Some(false)));
}

#[test]
fn test_shuffled_input_gives_sorted_output() {
    let ordered = points(&random_walk(70));
    let mut shuffled = ordered.clone();
    shuffled.rotate_left(23);
    shuffled.swap(0, 50);

    let out = compute_indicators(&shuffled);
    assert!(out.windows(2).all(|w| w[0].date < w[1].date));
    assert_eq!(out, compute_indicators(&ordered));
}

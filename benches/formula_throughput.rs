//! Throughput benchmarks for the formula library
//!
//! Each formula is closed-form, so a single evaluation should stay in the
//! nanosecond range; the full sweep is measured as a whole.

use criterion::{criterion_group, criterion_main, Criterion};
use lcis_formulas::application::simulation;
use lcis_formulas::config::SimulationSettings;
use lcis_formulas::domain::{
    compute_carbon_credits, compute_optimal_charging, compute_portfolio_valuation, sample_portfolio,
    BatteryState, Celsius, FormulaParameters, Fraction, KilowattHours, Percentage, StateOfHealth,
};
use std::hint::black_box;

fn bench_single_formulas(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_formulas");
    let params = FormulaParameters::default();

    group.bench_function("carbon_credits", |b| {
        let energy = KilowattHours::try_new(25.0).expect("25 kWh is valid");
        let clean = Fraction::try_new(0.7).expect("0.7 is valid");
        b.iter(|| black_box(compute_carbon_credits(black_box(energy), clean, &params.carbon)));
    });

    group.bench_function("optimal_charging", |b| {
        let battery = BatteryState::new(
            KilowattHours::try_new(15.0).expect("15 kWh is valid"),
            StateOfHealth::try_new(0.85).expect("0.85 is valid"),
            Celsius::try_new(30.0).expect("30 C is valid"),
            Percentage::try_new(80.0).expect("80% is valid"),
            1200,
        )
        .expect("Capacity is positive");
        b.iter(|| black_box(compute_optimal_charging(black_box(&battery), &params.degradation)));
    });

    for size in [5, 50, 500] {
        let assets: Vec<_> = sample_portfolio(size, 42)
            .into_iter()
            .map(|demo| demo.asset)
            .collect();
        group.bench_function(format!("portfolio_valuation_{size}"), |b| {
            b.iter(|| black_box(compute_portfolio_valuation(black_box(&assets))));
        });
    }

    group.finish();
}

fn bench_full_sweep(c: &mut Criterion) {
    let params = FormulaParameters::default();
    let settings = SimulationSettings::default();

    c.bench_function("full_sweep", |b| {
        b.iter(|| black_box(simulation::run(&params, &settings)));
    });
}

criterion_group!(benches, bench_single_formulas, bench_full_sweep);
criterion_main!(benches);

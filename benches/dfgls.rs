use std::hint::black_box;
use std::time::Duration;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use dfgls::DeterministicTerm;
use dfgls::DfglsConfig;
use dfgls::LagSelection;
use dfgls::ers_dfgls_test;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::Distribution;
use rand_distr::Normal;

fn random_walk(n: usize) -> Vec<f64> {
  let mut rng = StdRng::seed_from_u64(42);
  let normal = Normal::new(0.0, 1.0).unwrap();
  let mut x = vec![0.0; n];
  for t in 1..n {
    x[t] = x[t - 1] + normal.sample(&mut rng);
  }
  x
}

fn bench_dfgls(c: &mut Criterion) {
  let mut group = c.benchmark_group("DFGLS");
  group.measurement_time(Duration::from_secs(3));
  group.warm_up_time(Duration::from_millis(500));

  for &n in &[500usize, 5_000usize] {
    let x = random_walk(n);

    for (name, lag_selection) in [
      ("aic", LagSelection::Aic),
      ("tstat", LagSelection::TStat),
      ("fixed", LagSelection::Fixed),
    ] {
      let cfg = DfglsConfig {
        trend: DeterministicTerm::ConstantTrend,
        lag_selection,
        max_lags: None,
      };
      group.bench_with_input(BenchmarkId::new(name, n), &x, |b, x| {
        b.iter(|| black_box(ers_dfgls_test(x, cfg).unwrap().statistic))
      });
    }
  }

  group.finish();
}

criterion_group!(benches, bench_dfgls);
criterion_main!(benches);

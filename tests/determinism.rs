use easy21lib::training::episode;
use easy21lib::Controller;
use easy21lib::Easy21;
use easy21lib::LinearSarsa;
use easy21lib::MonteCarlo;
use easy21lib::Sarsa;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn monte_carlo_is_reproducible() {
    let train = |seed| {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut mc = MonteCarlo::default();
        for _ in 0..2_000 {
            episode::monte_carlo(&Easy21, &mut mc, rng).expect("in domain");
        }
        (*mc.table(), *mc.counts())
    };
    assert!(train(5) == train(5));
    assert!(train(5) != train(6));
}

#[test]
fn sarsa_is_reproducible() {
    let train = |seed| {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut sarsa = Sarsa::from(0.6);
        for _ in 0..500 {
            episode::temporal(&Easy21, &mut sarsa, rng).expect("in domain");
        }
        sarsa.values().expect("in domain")
    };
    assert!(train(11) == train(11));
}

#[test]
fn lfa_is_reproducible() {
    let train = |seed| {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut lfa = LinearSarsa::from(0.6);
        for _ in 0..500 {
            episode::temporal(&Easy21, &mut lfa, rng).expect("in domain");
        }
        lfa.weights().to_vec()
    };
    assert!(train(13) == train(13));
}

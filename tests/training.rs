use easy21lib::save::Export;
use easy21lib::Config;
use easy21lib::Controller;
use easy21lib::Error;
use easy21lib::Experiment;

fn config(output: Option<std::path::PathBuf>) -> Config {
    Config {
        seed: 3,
        episodes_mc: 20_000,
        episodes_sarsa: 200,
        episodes_lfa: 200,
        checkpoints: vec![1_000, 20_000],
        lambdas: vec![0., 1.],
        output,
        ..Config::default()
    }
}

#[test]
fn monte_carlo_learns_sensible_values() {
    let experiment = Experiment::from(config(None));
    let (mc, _) = experiment.monte_carlo().expect("trains");
    let values = mc.values().expect("in domain");
    assert!(values.iter().all(|q| (-1. ..=1.).contains(q)));
    // sticking on 21 never loses
    for dealer in 1..=10 {
        let q = values
            .get(dealer, 21, easy21lib::Action::Stick)
            .expect("in domain");
        assert!(q >= 0., "stick on 21 vs {dealer}: {q}");
    }
    let visited = mc.counts().iter().filter(|n| **n > 0).count();
    assert!(visited > 200, "{visited}");
}

#[test]
fn sweeps_record_an_error_per_episode() {
    let experiment = Experiment::from(config(None));
    let (mc, _) = experiment.monte_carlo().expect("trains");
    for sweep in [
        experiment.sarsa(mc.table()).expect("trains"),
        experiment.lfa(mc.table()).expect("trains"),
    ] {
        assert!(sweep.finals().len() == 2);
        for curve in sweep.curves() {
            assert!(curve.errors().len() == 200);
            assert!(curve.errors().iter().all(|e| e.is_finite() && *e >= 0.));
            let last = sweep
                .finals()
                .iter()
                .find(|(lambda, _)| *lambda == curve.lambda())
                .map(|(_, error)| *error);
            assert!(curve.last() == last);
        }
    }
}

#[test]
fn exports_reports() {
    let root = std::env::temp_dir().join(format!("easy21-training-{}", std::process::id()));
    let experiment = Experiment::from(Config {
        episodes_mc: 1_000,
        episodes_sarsa: 10,
        episodes_lfa: 10,
        checkpoints: vec![1_000],
        lambdas: vec![0.5],
        ..config(Some(root.clone()))
    });
    let (mc, snapshots) = experiment.monte_carlo().expect("trains");
    assert!(snapshots.len() == 1);
    assert!(snapshots[0].path(&root).exists());
    let sweep = experiment.sarsa(mc.table()).expect("trains");
    assert!(sweep.path(&root) == root.join("sarsa_controller").join("errors.json"));
    assert!(sweep.path(&root).exists());
    assert!(root.join("sarsa_controller").join("surface_lambda_0.5.json").exists());
    experiment.lfa(mc.table()).expect("trains");
    assert!(root.join("lfa_controller").join("errors.json").exists());
    std::fs::remove_dir_all(&root).expect("cleanup");
}

#[test]
fn config_round_trips_through_a_file() {
    let path = std::env::temp_dir().join(format!("easy21-config-{}.json", std::process::id()));
    let written = config(None);
    std::fs::write(&path, serde_json::to_string(&written).expect("serializes")).expect("writable");
    let loaded = Config::load(&path).expect("loads");
    assert!(loaded == written);
    std::fs::remove_file(&path).expect("cleanup");
    assert!(matches!(Config::load(&path), Err(Error::Io { .. })));
}

#[test]
fn invalid_config_is_rejected() {
    let bad = Config {
        lambdas: vec![-0.5],
        ..config(None)
    };
    assert!(matches!(
        bad.validate(),
        Err(Error::InvalidConfiguration { .. })
    ));
}

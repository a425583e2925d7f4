use approx::assert_abs_diff_eq;
use dynmath::config::DynmathConfig;
use dynmath::convert::{build_inversion_config, build_sampling_config};
use dynmath::linalg::{LinalgError, invert_cholesky, invert_lu, matrix_multiply, pack, unpack};
use dynmath::prob::{neg_log_likelihood_mvn, normalize_log_vector, softmax};
use dynmath::sampling::{random_diag_matrix, white_noise};
use ndarray::Array2;

const CONFIG: &str = r#"
[inversion]
det_threshold = 1e-6
on_singular = "error"

[sampling]
seed = 2024
"#;

#[test]
fn simulate_and_score_from_config() {
    let cfg = DynmathConfig::from_toml_str(CONFIG).unwrap();
    let inv_cfg = build_inversion_config(&cfg.inversion).unwrap();
    let mut rng = build_sampling_config(&cfg.sampling).rng();

    // Σ = D·Dᵀ + I is SPD for any diagonal D.
    let d = random_diag_matrix(3, &mut rng);
    let cov = matrix_multiply(d.view(), d.view(), false, true).unwrap() + Array2::<f64>::eye(3);

    let chol = invert_cholesky(cov.view(), &inv_cfg).unwrap();
    let lu = invert_lu(cov.view(), &inv_cfg).unwrap();
    assert_abs_diff_eq!(chol.det(), lu.det(), epsilon = 1e-10);
    for (a, b) in chol.inverse().iter().zip(lu.inverse().iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-10);
    }

    // Covariances round-trip through the packed parameter vector.
    let restored = unpack(pack(cov.view()).unwrap().view()).unwrap();
    assert_eq!(restored, cov);

    let sigma = cov.diag().mapv(f64::sqrt);
    let x = white_noise(sigma.view(), &mut rng).unwrap();
    let nll = neg_log_likelihood_mvn(x.view(), chol.inverse().view(), chol.det()).unwrap();
    assert!(nll.is_finite());
}

#[test]
fn seeded_runs_are_reproducible() {
    let cfg = DynmathConfig::from_toml_str(CONFIG).unwrap();
    let sampling = build_sampling_config(&cfg.sampling);
    let a = random_diag_matrix(4, &mut sampling.rng());
    let b = random_diag_matrix(4, &mut sampling.rng());
    assert_eq!(a, b);
}

#[test]
fn error_policy_surfaces_singular_matrix() {
    let cfg = DynmathConfig::from_toml_str(CONFIG).unwrap();
    let inv_cfg = build_inversion_config(&cfg.inversion).unwrap();
    let singular = ndarray::array![[1.0, 2.0], [2.0, 4.0]];
    assert!(matches!(
        invert_lu(singular.view(), &inv_cfg),
        Err(LinalgError::SingularMatrix { .. })
    ));
}

#[test]
fn sentinel_policy_from_toml() {
    let cfg = DynmathConfig::from_toml_str("[inversion]\non_singular = \"sentinel\"\n").unwrap();
    let inv_cfg = build_inversion_config(&cfg.inversion).unwrap();
    let singular = ndarray::array![[1.0, 2.0], [2.0, 4.0]];
    let r = invert_lu(singular.view(), &inv_cfg).unwrap();
    assert!(r.inverse().iter().all(|&v| v == 10000.0));
}

#[test]
fn unknown_policy_is_rejected() {
    let cfg = DynmathConfig::from_toml_str("[inversion]\non_singular = \"panic\"\n").unwrap();
    assert!(build_inversion_config(&cfg.inversion).is_err());
}

#[test]
fn posterior_weights_agree() {
    let log_w = ndarray::array![-3.0, -1.0, -2.5, 0.5];
    let p = softmax(log_w.view()).unwrap();
    let mut q = log_w.clone();
    normalize_log_vector(&mut q).unwrap();
    for (a, b) in p.iter().zip(q.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-14);
    }
}

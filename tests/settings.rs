use std::io::Write;

use fmatvec::prelude::*;
use fmatvec::{tilde, tilde_with_tol, Settings, Tolerances, YamlRead};

mod shared;

#[test]
fn load_from_file() {
    shared::init();
    let path = std::env::temp_dir().join(format!("fmatvec-settings-{}.yaml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    // the misspelled key is only warned about
    writeln!(file, "tilde-tol: 0.01\nsymmetry-rel-tol: 0.001\nlog-levle: debug").unwrap();
    drop(file);

    let settings = Settings::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(settings.to_tolerances(), Tolerances {
        tilde: 0.01,
        symmetry_rel: 0.001,
        ..Tolerances::default()
    });
    assert_eq!(settings.log_level, "info");

    let (_, unused) = Settings::from_yaml_str_with_unused("log-levle: debug\n").unwrap();
    assert_eq!(unused, vec!["log-levle".to_string()]);
}

#[test]
fn missing_file() {
    let err = Settings::load("/nonexistent/fmatvec.yaml").unwrap_err();
    assert!(err.to_string().contains("fmatvec.yaml"), "{}", err);
}

#[test]
fn tolerances_reach_the_matrices() {
    let settings = Settings::from_yaml("symmetry-abs-tol: 0.1\ntilde-tol: 0.1\n").unwrap();
    let tol = settings.to_tolerances();

    let rows = [[1.0, 2.0], [2.05, 3.0]];
    assert!(SymMat::<f64>::from_rows(&rows).is_err());
    let s = SymMat::<f64>::from_rows_with_tol(&rows, &tol).unwrap();
    assert_eq!(s.e(0, 1), 2.05);

    let mut t = tilde(&ColVec3::<f64>::from_array([1.0, 2.0, 3.0]));
    t.set(0, 0, 0.05);
    assert_eq!(tilde_with_tol(&t, tol.tilde).to_vec(), vec![1.0, 2.0, 3.0]);
}

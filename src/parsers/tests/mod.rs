//! Unit tests for the parser modules
//!
//! Organized by parser, with shared fixture builders for the setup files of
//! a realistic polar-disk problem.


/// Lines of a small but realistic `idefix.ini`
pub fn sample_ini_lines() -> Vec<String> {
    vec![
        "[Grid]".to_string(),
        "X1-grid    1    0.5    64    uni    10.0".to_string(),
        "X2-grid    1    0.0    1    uni    3.141592653589793".to_string(),
        "".to_string(),
        "[TimeIntegrator]".to_string(),
        "CFL         0.9".to_string(),
        "tstop       100.0".to_string(),
        "first_dt    1.e-6".to_string(),
        "nstages     2".to_string(),
        "".to_string(),
        "[Hydro]".to_string(),
        "solver    hllc".to_string(),
        "csiso     userdef".to_string(),
        "".to_string(),
        "[Output]".to_string(),
        "vtk    10.0".to_string(),
        "dmp    50.0    # restart dumps".to_string(),
    ]
}

/// Lines of a small but realistic `definitions.hpp`
pub fn sample_definitions_lines() -> Vec<String> {
    vec![
        "#ifndef DEFINITIONS_HPP_".to_string(),
        "#define DEFINITIONS_HPP_".to_string(),
        "".to_string(),
        "#define COMPONENTS 3".to_string(),
        "#define DIMENSIONS 3".to_string(),
        "#define GEOMETRY POLAR".to_string(),
        "#define ISOTHERMAL".to_string(),
        "".to_string(),
        "#endif".to_string(),
    ]
}

/// Lines of a small but realistic `setup.cpp`
pub fn sample_setup_lines() -> Vec<String> {
    vec![
        "#include \"idefix.hpp\"".to_string(),
        "#include \"setup.hpp\"".to_string(),
        "".to_string(),
        "real epsilonGlob;".to_string(),
        "".to_string(),
        "void MySoundSpeed(DataBlock &data, const real t, IdefixArray3D<real> &cs) {".to_string(),
        "  real epsilon = epsilonGlob;".to_string(),
        "  IdefixArray1D<real> x1 = data.x[IDIR];".to_string(),
        "}".to_string(),
        "".to_string(),
        "void Setup::InitFlow (DataBlock &data) {".to_string(),
        "  DataBlockHost d(data);".to_string(),
        "  d.SyncToDevice();".to_string(),
        "}".to_string(),
    ]
}

/// Lines of a realistic log file around the sample configuration
pub fn sample_log_lines(with_gravity: bool) -> Vec<String> {
    let rule = "-".repeat(89);
    let mut lines = vec![
        "Idefix version 2.0.03".to_string(),
        "Init: Initialising grid.".to_string(),
        "Input Parameters using input file idefix.ini:".to_string(),
        rule.clone(),
    ];
    lines.extend(sample_ini_lines());
    lines.push(rule);
    lines.push("Grid: Building grid.".to_string());
    lines.push("Input: DIMENSIONS=3.".to_string());
    lines.push("Input: COMPONENTS=3.".to_string());
    lines.push("Hydro: Initialising Hydro.".to_string());
    if with_gravity {
        lines.push("Gravity: G=0.001".to_string());
    }
    lines.push("Main: Cycling Main Loop.".to_string());
    lines
}

// Python-bindinger: tynne JSON-inn/JSON-ut-wrappere rundt kjernen.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::error::AnalyticsError;

fn to_py_err(err: AnalyticsError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[pyfunction]
#[pyo3(signature = (samples_json, config_json = None))]
fn analyze_track_json(samples_json: &str, config_json: Option<&str>) -> PyResult<String> {
    crate::analyzer::analyze_track_json(samples_json, config_json).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (samples_json, metric, config_json = None))]
fn segment_json(samples_json: &str, metric: &str, config_json: Option<&str>) -> PyResult<String> {
    crate::analyzer::segment_json(samples_json, metric, config_json).map_err(to_py_err)
}

#[pyfunction]
fn period_stats_json(records_json: &str, year: i32, period: &str) -> PyResult<String> {
    crate::analyzer::period_stats_json(records_json, year, period).map_err(to_py_err)
}

#[pyfunction]
fn metrics_text() -> String {
    crate::telemetry::gather_text()
}

#[pymodule]
fn trackgraph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze_track_json, m)?)?;
    m.add_function(wrap_pyfunction!(segment_json, m)?)?;
    m.add_function(wrap_pyfunction!(period_stats_json, m)?)?;
    m.add_function(wrap_pyfunction!(metrics_text, m)?)?;
    Ok(())
}

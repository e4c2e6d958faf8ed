//! Python bindings for the session layer
//!
//! Rules cross the boundary as JSON strings of their storable form, so the
//! session can keep them in its own state between requests.

use pyo3::prelude::*;
use pyo3::exceptions::PyTypeError;
use pyo3::types::{PyAny, PyBool, PyDict};

use crate::context::{Bindings, EvaluationContext};
use crate::rule::{clear_cache, get_or_compile, Literal, StorableRule};
use crate::ruleset::BoundRules;

// ============================================================================
// Helper Functions
// ============================================================================

/// `None` stays unset, numbers become `Number`, anything else must be a str
///
/// `bool` is rejected even though Python treats it as an int.
fn extract_literal(value: &Bound<'_, PyAny>) -> PyResult<Option<Literal>> {
    if value.is_none() {
        return Ok(None);
    }
    if value.is_instance_of::<PyBool>() {
        return Err(PyTypeError::new_err("boolean is not a valid rule value"));
    }
    if let Ok(n) = value.extract::<f64>() {
        return Ok(Some(Literal::Number(n)));
    }
    let text: String = value.extract()?;
    Ok(Some(Literal::Text(text)))
}

fn extract_bindings(dict: &Bound<'_, PyDict>) -> PyResult<Bindings> {
    let mut bindings = Bindings::default();
    for (key, value) in dict.iter() {
        let name: String = key.extract()?;
        bindings.insert(name, extract_literal(&value)?);
    }
    Ok(bindings)
}

fn bindings_to_dict<'py>(py: Python<'py>, bindings: &Bindings) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    for (name, value) in bindings {
        match value {
            Some(Literal::Number(n)) => dict.set_item(name, *n)?,
            Some(Literal::Text(s)) => dict.set_item(name, s)?,
            None => dict.set_item(name, py.None())?,
        }
    }
    Ok(dict)
}

// ============================================================================
// Python Functions
// ============================================================================

/// Compile a derivation rule to its storable JSON form
///
/// # Arguments
/// * `source` - Rule text, e.g. "if age > 30 then tier = senior"
/// * `on_error` - Optional callable receiving the error message
///
/// # Returns
/// The storable rule as JSON, or None if the rule is invalid
#[pyfunction]
#[pyo3(signature = (source, on_error=None))]
fn compile_rule(source: &str, on_error: Option<&Bound<'_, PyAny>>) -> PyResult<Option<String>> {
    match get_or_compile(source) {
        Ok(rule) => Ok(Some(rule.to_json()?)),
        Err(err) => {
            if let Some(callback) = on_error {
                callback.call1((err.to_string(),))?;
            }
            Ok(None)
        }
    }
}

/// Run stored rules once, in order, against one session's values
///
/// # Arguments
/// * `rules` - Storable rules as returned by `compile_rule`
/// * `parameters` - Parameter answers, None for unanswered
/// * `attributes` - Current attribute values, None for underived
///
/// # Returns
/// The updated attributes dict; its keys are those of `attributes`
#[pyfunction]
fn run_rules<'py>(
    py: Python<'py>,
    rules: Vec<String>,
    parameters: &Bound<'py, PyDict>,
    attributes: &Bound<'py, PyDict>,
) -> PyResult<Bound<'py, PyDict>> {
    let storables = rules
        .iter()
        .map(|json| StorableRule::from_json(json))
        .collect::<crate::error::Result<Vec<_>>>()?;
    let bound = BoundRules::bind(&storables)?;

    let mut ctx = EvaluationContext {
        parameters: extract_bindings(parameters)?,
        attributes: extract_bindings(attributes)?,
    };
    bound.run(&mut ctx);

    bindings_to_dict(py, &ctx.attributes)
}

/// Drop every cached compilation
#[pyfunction]
fn clear_rule_cache() {
    clear_cache();
}

// ============================================================================
// Python Module Definition
// ============================================================================

#[pymodule]
fn derivation_rules_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compile_rule, m)?)?;
    m.add_function(wrap_pyfunction!(run_rules, m)?)?;
    m.add_function(wrap_pyfunction!(clear_rule_cache, m)?)?;
    Ok(())
}

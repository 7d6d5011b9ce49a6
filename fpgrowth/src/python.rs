use crate::config::{MinSupport, MiningConfig};
use crate::fp::{fp_growth_with_config, transactions_from_matrix};
use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Mine string transactions with an absolute support count.
#[pyfunction]
#[pyo3(name = "fp_growth", signature = (transactions, min_support, parallel = false))]
fn fp_growth_py(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support: usize,
    parallel: bool,
) -> PyResult<Vec<(Vec<String>, usize)>> {
    let config = MiningConfig::new(MinSupport::Count(min_support)).with_parallel(parallel);
    let outcome = py
        .allow_threads(|| fp_growth_with_config(&transactions, &config))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(outcome
        .patterns
        .iter()
        .map(|pattern| (pattern.items.to_vec(), pattern.support))
        .collect())
}

/// Mine a binary transaction matrix with a relative support. Returns one
/// `(n, k)` array of sorted column indices per itemset size `k`.
#[pyfunction]
#[pyo3(name = "fp_growth_matrix")]
fn fp_growth_matrix_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
    let rows = transactions_from_matrix(transactions.as_array());
    let config = MiningConfig::new(MinSupport::Fraction(min_support)).with_parallel(true);
    let outcome = py
        .allow_threads(|| fp_growth_with_config(&rows, &config))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let mut result = Vec::new();

    for (&itemset_size, &num_itemsets) in &outcome.patterns.count_by_size() {
        let mut data = Vec::with_capacity(num_itemsets * itemset_size);

        for pattern in outcome.patterns.iter().filter(|p| p.items.len() == itemset_size) {
            let mut itemset = pattern.items.to_vec();
            itemset.sort_unstable();
            data.extend(itemset);
        }

        let array = Array2::from_shape_vec((num_itemsets, itemset_size), data)
            .map_err(|_| PyValueError::new_err("Failed to create array"))?;

        result.push(array.into_pyarray(py));
    }

    Ok(result)
}

#[pymodule]
fn fpgrowth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    m.add_function(wrap_pyfunction!(fp_growth_matrix_py, m)?)?;
    Ok(())
}

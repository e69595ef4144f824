//! Regression test parameters and comparisons

use std::fmt::Debug;
use treasure_core::Grid;

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of the
/// current comparison, and the failures recorded so far. Comparisons never
/// panic; call [`RegParams::cleanup`] at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "label")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        // NaN never compares within delta
        if diff.is_nan() || diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Record a boolean check
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            self.fail(format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            ));
        }
        condition
    }

    /// Compare two values for equality
    pub fn compare_eq<T: PartialEq + Debug>(&mut self, expected: &T, actual: &T) -> bool {
        self.index += 1;
        if expected != actual {
            self.fail(format!(
                "Failure in {}_reg: equality for index {}\n\
                 expected = {:?}, actual = {:?}",
                self.test_name, self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two grids cell by cell
    pub fn compare_grids<T: PartialEq + Debug>(&mut self, g1: &Grid<T>, g2: &Grid<T>) -> bool {
        self.index += 1;

        if g1.dimensions() != g2.dimensions() {
            self.fail(format!(
                "Failure in {}_reg: grid comparison for index {} - dimension mismatch",
                self.test_name, self.index
            ));
            return false;
        }

        let width = g1.width();
        for (i, (a, b)) in g1.data().iter().zip(g2.data()).enumerate() {
            if a != b {
                let x = i as u32 % width;
                let y = i as u32 / width;
                self.fail(format!(
                    "Failure in {}_reg: grid comparison for index {} - mismatch at ({}, {}): {:?} vs {:?}",
                    self.test_name, self.index, x, y, a, b
                ));
                return false;
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

//! Regression test parameters and operations

use glrl_core::FeatureMap;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare and report failures only (default)
    #[default]
    Compare,
    /// Compare and also print every checked value
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "histogram")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode (compare or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters, taking the mode from the
    /// `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create new regression test parameters with an explicit mode.
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value (typically hand-computed)
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff.is_nan() || diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            if self.display() {
                eprintln!("{}_reg index {}: {}", self.test_name, self.index, actual);
            }
            true
        }
    }

    /// Compare two vectors element by element
    ///
    /// Counts as a single check; the first differing element is reported.
    pub fn compare_vectors(&mut self, expected: &[f64], actual: &[f64], delta: f64) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            self.fail(format!(
                "Failure in {}_reg: vector comparison for index {} - length {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            ));
            return false;
        }

        for (k, (&e, &a)) in expected.iter().zip(actual).enumerate() {
            let diff = (e - a).abs();
            if diff.is_nan() || diff > delta {
                self.fail(format!(
                    "Failure in {}_reg: vector comparison for index {} at element {}\n\
                     expected = {}, actual = {}, allowed delta = {}",
                    self.test_name, self.index, k, e, a, delta
                ));
                return false;
            }
        }

        true
    }

    /// Compare two feature maps for equal geometry, names and values
    pub fn compare_feature_maps(&mut self, map1: &FeatureMap, map2: &FeatureMap, delta: f64) -> bool {
        self.index += 1;

        if map1.geometry() != map2.geometry() || map1.names() != map2.names() {
            self.fail(format!(
                "Failure in {}_reg: feature map comparison for index {} - layout mismatch",
                self.test_name, self.index
            ));
            return false;
        }

        let n = map1.components();
        for (i, (&a, &b)) in map1.data().iter().zip(map2.data()).enumerate() {
            let diff = (a - b).abs();
            if diff.is_nan() || diff > delta {
                let voxel = map1.geometry().index_of(i / n);
                self.fail(format!(
                    "Failure in {}_reg: feature map comparison for index {} - \
                     component {} mismatch at {:?}: {} vs {}",
                    self.test_name,
                    self.index,
                    map1.names()[i % n],
                    voxel,
                    a,
                    b
                ));
                return false;
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
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

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

//! Regression test parameters and operations

use derby_core::{ChannelPlane, ImageStore};

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of
/// the current check, and the failures recorded so far.
pub struct RegParams {
    /// Name of the test (e.g., "levels")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "levels")
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

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two numeric values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two image stores for exact equality, including color space.
    ///
    /// # Returns
    ///
    /// `true` if the stores are identical, `false` otherwise.
    pub fn compare_stores(&mut self, expected: &ImageStore, actual: &ImageStore) -> bool {
        self.index += 1;

        if expected.width() != actual.width()
            || expected.height() != actual.height()
            || expected.color_space() != actual.color_space()
        {
            let msg = format!(
                "Failure in {}_reg: store comparison for index {} - shape mismatch \
                 ({}x{} {:?} vs {}x{} {:?})",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                expected.color_space(),
                actual.width(),
                actual.height(),
                actual.color_space()
            );
            self.fail(msg);
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                let p1 = expected.pixel(x, y);
                let p2 = actual.pixel(x, y);
                if p1 != p2 {
                    let msg = format!(
                        "Failure in {}_reg: store comparison for index {} - pixel mismatch \
                         at ({}, {}): expected {:?}, got {:?}",
                        self.test_name, self.index, x, y, p1, p2
                    );
                    self.fail(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two planes for exact equality.
    pub fn compare_planes(&mut self, expected: &ChannelPlane, actual: &ChannelPlane) -> bool {
        self.index += 1;

        if !expected.same_extent(actual) {
            let msg = format!(
                "Failure in {}_reg: plane comparison for index {} - extent mismatch",
                self.test_name, self.index
            );
            self.fail(msg);
            return false;
        }

        for y in 0..expected.height() {
            if expected.row(y) != actual.row(y) {
                let msg = format!(
                    "Failure in {}_reg: plane comparison for index {} - row {} differs\n\
                     expected = {:?}\n\
                     actual   = {:?}",
                    self.test_name,
                    self.index,
                    y,
                    expected.row(y),
                    actual.row(y)
                );
                self.fail(msg);
                return false;
            }
        }

        true
    }

    /// Compare two binary data arrays
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg);
            false
        } else {
            true
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use derby_core::ColorSpace;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_stores_color_space() {
        let mut rp = RegParams::new("test");
        let a = ImageStore::new(2, 2, ColorSpace::Rgb).unwrap();
        let b = ImageStore::new(2, 2, ColorSpace::Hsv).unwrap();
        assert!(rp.compare_stores(&a, &a.clone()));
        assert!(!rp.compare_stores(&a, &b));
        assert_eq!(rp.index(), 2);
    }
}

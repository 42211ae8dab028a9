/// Common test utilities for the integration tests
use std::collections::HashMap;
use std::env;

/// Test environment manager that captures and restores env vars
pub struct TestEnv {
    original_vars: HashMap<String, Option<String>>,
    keys_to_track: Vec<String>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            original_vars: HashMap::new(),
            keys_to_track: Vec::new(),
        }
    }

    /// Set an environment variable and track it for cleanup
    ///
    /// # Safety
    /// This modifies environment variables which is inherently unsafe in
    /// multi-threaded contexts. Only use from tests that keep all env
    /// mutation in a single test function.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.track(key);
        // SAFETY: all env mutation in this test binary is sequential
        unsafe { env::set_var(key, value) };
        self
    }

    /// Remove an environment variable and track it for cleanup
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.track(key);
        // SAFETY: all env mutation in this test binary is sequential
        unsafe { env::remove_var(key) };
        self
    }

    fn track(&mut self, key: &str) {
        if !self.keys_to_track.contains(&key.to_string()) {
            self.original_vars.insert(key.to_string(), env::var(key).ok());
            self.keys_to_track.push(key.to_string());
        }
    }

    /// Restore all tracked environment variables to their original state
    pub fn restore(&self) {
        for key in &self.keys_to_track {
            if let Some(original) = self.original_vars.get(key) {
                // SAFETY: called during test cleanup
                unsafe {
                    match original {
                        Some(value) => env::set_var(key, value),
                        None => env::remove_var(key),
                    }
                }
            }
        }
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_restore() {
        let original = env::var("COMMON_TEST_VAR").ok();

        {
            let mut test_env = TestEnv::new();
            test_env.set("COMMON_TEST_VAR", "test_value");
            assert_eq!(env::var("COMMON_TEST_VAR").unwrap(), "test_value");
        }

        // After drop, should be restored
        assert_eq!(env::var("COMMON_TEST_VAR").ok(), original);
    }

    #[test]
    fn remove_and_restore() {
        // SAFETY: this variable is only touched by this test
        unsafe { env::set_var("COMMON_TEST_VAR_REMOVE", "initial") };

        {
            let mut test_env = TestEnv::new();
            test_env.remove("COMMON_TEST_VAR_REMOVE");
            assert!(env::var("COMMON_TEST_VAR_REMOVE").is_err());
        }

        assert_eq!(env::var("COMMON_TEST_VAR_REMOVE").unwrap(), "initial");

        // SAFETY: cleanup of a test-owned variable
        unsafe { env::remove_var("COMMON_TEST_VAR_REMOVE") };
    }
}

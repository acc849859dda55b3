use alloc::{string::String, vec::Vec};

/// Names of the modules currently being resolved, outermost first.
///
/// The path only lives for a single resolution call, so independent calls never see each other's modules.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolvePath {
    stack: Vec<String>,
}

impl ResolvePath {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Pushes `name` onto the path.
    ///
    /// # Errors
    /// Returns the closed cycle if `name` is already on the path,
    /// starting and ending with `name`. The path is left unchanged.
    pub fn enter(&mut self, name: &str) -> Result<(), Vec<String>> {
        if let Some(start) = self.stack.iter().position(|entered| entered == name) {
            let mut cycle = self.stack[start..].to_vec();
            cycle.push(String::from(name));
            return Err(cycle);
        }

        self.stack.push(String::from(name));
        Ok(())
    }

    #[inline]
    pub fn leave(&mut self) -> Option<String> {
        self.stack.pop()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.stack.iter().any(|entered| entered == name)
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.stack
    }
}

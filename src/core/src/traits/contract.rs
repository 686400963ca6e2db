//! Contract dispatch trait

use crate::error::{DispatchError, Result};
use crate::types::{ExecutionContext, Principal, Response, Value};

/// A deployed contract reachable by method name
pub trait Contract {
    /// Name the contract is deployed under
    fn name(&self) -> &'static str;

    /// Public and read-only methods accepted by `call`
    fn methods(&self) -> &'static [&'static str];

    /// Route a call to the matching handler
    ///
    /// Business-rule failures come back as `Ok(Response::Err(code))`; an
    /// `Err` means the method or its arguments were malformed.
    fn call(&mut self, ctx: &ExecutionContext, method: &str, args: &[Value]) -> Result<Response>;
}

/// Positional argument reader for a single call
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    method: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    /// Wrap `values`, failing unless exactly `expected` were supplied
    pub fn new(method: &'a str, values: &'a [Value], expected: usize) -> Result<Self> {
        if values.len() != expected {
            return Err(DispatchError::ArgumentCount {
                method: method.to_string(),
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { method, values })
    }

    fn type_error(&self, index: usize, expected: &'static str) -> DispatchError {
        DispatchError::ArgumentType {
            method: self.method.to_string(),
            index,
            expected,
        }
    }

    pub fn principal(&self, index: usize) -> Result<Principal> {
        self.values[index]
            .as_principal()
            .ok_or_else(|| self.type_error(index, "a principal"))
    }

    pub fn text(&self, index: usize) -> Result<String> {
        self.values[index]
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| self.type_error(index, "a string"))
    }

    pub fn int(&self, index: usize) -> Result<i64> {
        self.values[index]
            .as_int()
            .ok_or_else(|| self.type_error(index, "a signed integer"))
    }

    pub fn uint(&self, index: usize) -> Result<u64> {
        self.values[index]
            .as_uint()
            .ok_or_else(|| self.type_error(index, "an unsigned integer"))
    }

    /// List whose every element is a string
    pub fn text_list(&self, index: usize) -> Result<Vec<String>> {
        let items = self.values[index]
            .as_list()
            .ok_or_else(|| self.type_error(index, "a list of strings"))?;

        items
            .iter()
            .map(|item| {
                item.as_text()
                    .map(str::to_string)
                    .ok_or_else(|| self.type_error(index, "a list of strings"))
            })
            .collect()
    }
}

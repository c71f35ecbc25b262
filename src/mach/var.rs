use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names are kept exactly as typed. A variable exists only after it has
/// been assigned; there is no implicit zero.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, i32>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn fetch(&self, var_name: &str) -> Result<i32> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(VariableNotDefined)),
        }
    }

    pub fn store(&mut self, var_name: &str, value: i32) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.to_string(), value);
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_undefined_is_an_error() {
        let var = Var::new();
        assert_eq!(
            var.fetch("x").map_err(|e| e.code()),
            Err(ErrorCode::VariableNotDefined)
        );
    }

    #[test]
    fn test_store_and_overwrite() {
        let mut var = Var::new();
        var.store("x", 3);
        assert_eq!(var.fetch("x"), Ok(3));
        var.store("x", -7);
        assert_eq!(var.fetch("x"), Ok(-7));
        assert_eq!(var.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut var = Var::new();
        var.store("Total", 1);
        assert!(var.fetch("total").is_err());
        assert_eq!(var.fetch("Total"), Ok(1));
    }

    #[test]
    fn test_clear() {
        let mut var = Var::new();
        var.store("a", 1);
        var.store("b", 2);
        var.clear();
        assert!(var.is_empty());
        assert!(var.fetch("a").is_err());
    }
}

// 👤 Person - name and age, read-only after construction

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: i64,
}

impl Person {
    /// Both fields are stored as given; empty names and negative ages are accepted.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    /// `'Name: <name>, Age: <age>'`, single quotes included
    pub fn get_details(&self) -> String {
        format!("'Name: {}, Age: {}'", self.name, self.age)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_details())
    }
}

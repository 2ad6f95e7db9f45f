use std::fmt;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", content = "persons", rename_all = "snake_case")]
pub enum Notification {
    AllCompliant,
    /// Persons under the weekly minimum, in order of first appearance.
    NonCompliant(Vec<String>),
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::AllCompliant => write!(f, "Everyone met the weekly hours"),
            Notification::NonCompliant(persons) => {
                write!(f, "Non-compliant: {}", persons.join(", "))
            }
        }
    }
}

use serde::Deserialize;

/// A directory entry, exactly as submitted by the add form and stored in
/// the `employee` table. All five attributes are free text; the table's own
/// constraints decide what is accepted.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Employee {
    pub emp_id: String,
    pub first_name: String,
    pub last_name: String,
    pub primary_skill: String,
    pub location: String,
}

impl Employee {
    /// Display name shown on the confirmation page.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload of the lookup form.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupQuery {
    pub emp_id: String,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

/// Types that can render themselves as a one-line human-readable summary.
pub trait Describe {
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub role: String,
}

impl Describe for Employee {
    fn describe(&self) -> String {
        format!("{} works as {}", self.name, self.role)
    }
}

/// An employee with one extra responsibility field. Composition rather than
/// subtyping; `describe` extends the base summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    #[serde(flatten)]
    pub employee: Employee,
    pub department: String,
}

impl Describe for Manager {
    fn describe(&self) -> String {
        format!("{}, heading {}", self.employee.describe(), self.department)
    }
}

/// One entry in a staff file. The `kind` tag picks the shape, so a mixed
/// roster deserializes without a separate schema per file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum StaffRecord {
    Employee(Employee),
    Manager(Manager),
}

impl Describe for StaffRecord {
    fn describe(&self) -> String {
        match self {
            StaffRecord::Employee(employee) => employee.describe(),
            StaffRecord::Manager(manager) => manager.describe(),
        }
    }
}

/// A raw field value whose runtime kind is either text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

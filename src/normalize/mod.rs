//! Field normalizers for raw worksheet values.
//!
//! Pure functions that turn raw cell text into the canonical forms the
//! report needs: month numbers, `NN.NN` experience strings, decomposed
//! names and 1-based label codes.

mod experience;
mod labels;
mod month;
mod name;

pub use experience::normalize_experience;
pub use labels::{AcademicDegree, EmploymentCondition, LabelSet, QualificationCategory, ordinal_of};
pub use month::month_number;
pub use name::{PersonName, decompose_full_name};

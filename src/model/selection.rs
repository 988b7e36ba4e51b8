use serde::{Deserialize, Serialize};

/// Which records are directly selected for a solve.
///
/// Every filter is optional; when several are given a record must match all
/// of them. The default selects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub course: Option<u32>,
    #[serde(default)]
    pub semester: Option<u32>,
}

impl Selection {
    /// Selects every record of every grade.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn course(mut self, course: u32) -> Self {
        self.course = Some(course);
        self
    }

    pub fn semester(mut self, semester: u32) -> Self {
        self.semester = Some(semester);
        self
    }

    /// Returns true if a record of `grade` with the given course and semester
    /// passes every filter.
    pub fn matches(&self, grade: &str, course: u32, semester: u32) -> bool {
        self.grade.as_deref().map_or(true, |g| g == grade)
            && self.course.map_or(true, |c| c == course)
            && self.semester.map_or(true, |s| s == semester)
    }

    /// Returns true if records of `grade` can match at all.
    pub fn admits_grade(&self, grade: &str) -> bool {
        self.grade.as_deref().map_or(true, |g| g == grade)
    }
}

use std::fmt;

use crate::problem::ProblemError;

/// Static definition of a problem type.
///
/// Applications declare their problem types once as constants and mint
/// [`ProblemError`] values from them:
///
/// ```
/// use http_problem::ProblemDef;
///
/// const ORDER_NOT_FOUND: ProblemDef =
///     ProblemDef::new("Order Not Found", 404, "https://example.com/probs/order-not-found");
///
/// let problem = ORDER_NOT_FOUND.with_detail("order 42 does not exist");
/// assert!(ORDER_NOT_FOUND.matches(&problem));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemDef {
    pub title: &'static str,
    pub status: u16,
    pub type_url: &'static str,
}

impl ProblemDef {
    pub const fn new(title: &'static str, status: u16, type_url: &'static str) -> Self {
        Self {
            title,
            status,
            type_url,
        }
    }

    /// Create a problem of this type
    pub fn problem(&self) -> ProblemError {
        ProblemError::new(self.title, self.status, self.type_url)
    }

    /// Create a problem of this type with an occurrence-specific detail
    pub fn with_detail(&self, detail: impl Into<String>) -> ProblemError {
        self.problem().with_detail(detail)
    }

    /// Whether `problem` has this definition's type and status
    pub fn matches(&self, problem: &ProblemError) -> bool {
        problem.type_url == self.type_url && problem.status == self.status
    }
}

impl fmt::Display for ProblemDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.type_url, self.status)
    }
}

impl From<ProblemDef> for ProblemError {
    fn from(def: ProblemDef) -> Self {
        def.problem()
    }
}

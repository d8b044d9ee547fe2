use std::fmt::{self, Display};

use crate::ast::brackets::Group;

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        f.write_str("]")
    }
}

/// Concatenate the rendering of each group.
pub fn stringify_forest(groups: &[Group]) -> String {
    groups.iter().map(Group::to_string).collect()
}

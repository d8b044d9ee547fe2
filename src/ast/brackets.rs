/// One `[ ... ]` group and the groups nested directly inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub children: Vec<Group>,
}

impl Group {
    pub fn new(children: Vec<Group>) -> Self {
        Self { children }
    }

    /// Deepest nesting level, counting this group as 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Group::depth).max().unwrap_or(0)
    }

    /// Number of groups including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Group::count).sum::<usize>()
    }
}

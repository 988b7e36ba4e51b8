use crate::pool::SlotIndex;

/// One level of the search stack: a variable and the values left to try.
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub(crate) var: usize,
    pub(crate) values: Vec<SlotIndex>,
    pub(crate) cursor: usize,
    /// Domains overwritten by the current value's forward check, oldest first.
    pub(crate) trail: Vec<(usize, Vec<SlotIndex>)>,
}

impl Frame {
    pub(crate) fn new(var: usize, values: Vec<SlotIndex>) -> Self {
        Self {
            var,
            values,
            cursor: 0,
            trail: Vec::new(),
        }
    }

    /// Next untried value, advancing the cursor.
    pub(crate) fn next_value(&mut self) -> Option<SlotIndex> {
        let value = self.values.get(self.cursor).copied();
        if value.is_some() {
            self.cursor += 1;
        }
        value
    }

    /// Puts back every domain saved on the trail, newest first.
    pub(crate) fn undo(&mut self, domains: &mut [Vec<SlotIndex>]) {
        while let Some((var, saved)) = self.trail.pop() {
            domains[var] = saved;
        }
    }
}

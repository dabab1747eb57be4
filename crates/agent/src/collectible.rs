/// Items the agent can gather, split the way the maze reports them.
///
/// The two kinds behave identically for decision making; they are kept apart
/// only so [`Collectibles::targets`] can reproduce the canonical
/// pills-then-power-pills order that nearest-target tie-breaks depend on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collectibles<L> {
    pub pills: Vec<L>,
    pub power_pills: Vec<L>,
}

impl<L> Collectibles<L> {
    pub fn new(pills: Vec<L>, power_pills: Vec<L>) -> Self {
        Self { pills, power_pills }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn len(&self) -> usize {
        self.pills.len() + self.power_pills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pills.is_empty() && self.power_pills.is_empty()
    }

    /// Ordinary pills first, then power pills.
    pub fn iter(&self) -> impl Iterator<Item = &L> {
        self.pills.iter().chain(self.power_pills.iter())
    }
}

impl<L: Copy> Collectibles<L> {
    /// Concatenated candidate list: ordinary pills first, then power pills.
    pub fn targets(&self) -> Vec<L> {
        self.iter().copied().collect()
    }
}

impl<L> Default for Collectibles<L> {
    fn default() -> Self {
        Self::empty()
    }
}

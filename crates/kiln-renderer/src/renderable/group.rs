use super::Renderable;

/// Ordered collection of renderables submitted as one unit.
#[derive(Debug, Clone, Default)]
pub struct Group {
    children: Vec<Renderable>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, child: impl Into<Renderable>) {
        self.children.push(child.into());
    }

    pub fn with(mut self, child: impl Into<Renderable>) -> Self {
        self.add(child);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Renderable> {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

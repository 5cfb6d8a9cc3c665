//! Text rendering of the graph.

use std::fmt;

use super::Graph;

/// Text layout for [`Graph::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One `(from, to)` pair per connection: `3: (3, 4), (3, 9), `
    Pairs,

    /// Destinations only: `3: [4, 9, ]`
    #[default]
    Compact,
}

/// A graph paired with a layout, ready to be formatted.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    graph: &'a Graph,
    layout: Layout,
}

impl<'a> Rendered<'a> {
    pub(super) fn new(graph: &'a Graph, layout: Layout) -> Self {
        Self { graph, layout }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (station, connections) in self.graph.entries() {
            write!(f, "{station}: ")?;
            match self.layout {
                Layout::Pairs => {
                    for c in connections {
                        write!(f, "({station}, {}), ", c.destination)?;
                    }
                }
                Layout::Compact => {
                    f.write_str("[")?;
                    for c in connections {
                        write!(f, "{}, ", c.destination)?;
                    }
                    f.write_str("]")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(Layout::default()), f)
    }
}

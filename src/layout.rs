//! Static Garden Layout
//!
//! The garden is fixed at compile time: an ordered list of beds and trees.
//! Every plot id the app will ever see is derived from this list.

use crate::models::PlotId;

/// A rectangular bed of `rows * cols` plots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bed {
    pub id: &'static str,
    pub rows: u32,
    pub cols: u32,
    /// CSS modifier, e.g. `4x8` renders as `bed--4x8`
    pub variant: &'static str,
}

/// A decorative tree marker; trees hold no plots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tree {
    pub id: &'static str,
    pub label: &'static str,
    pub fruit_icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Bed(Bed),
    Tree(Tree),
}

pub static GARDEN_LAYOUT: &[Section] = &[
    Section::Bed(Bed { id: "bed-a", rows: 8, cols: 4, variant: "4x8" }),
    Section::Bed(Bed { id: "bed-b", rows: 8, cols: 4, variant: "4x8" }),
    Section::Tree(Tree { id: "pear-1", label: "Pear Tree", fruit_icon: "🍐" }),
    Section::Tree(Tree { id: "pear-2", label: "Pear Tree", fruit_icon: "🍐" }),
    Section::Bed(Bed { id: "bed-c", rows: 8, cols: 2, variant: "2x8" }),
    Section::Tree(Tree { id: "cherry", label: "Cherry Tree", fruit_icon: "🍒" }),
    Section::Bed(Bed { id: "bed-d", rows: 8, cols: 4, variant: "4x8" }),
    Section::Bed(Bed { id: "bed-e", rows: 8, cols: 4, variant: "4x8" }),
];

impl Bed {
    /// Plot ids in row-major order: `r1c1, r1c2, ..., r2c1, ...`
    pub fn plot_ids(&self) -> Vec<PlotId> {
        let id = self.id;
        let cols = self.cols;
        (1..=self.rows)
            .flat_map(move |row| (1..=cols).map(move |col| PlotId::for_cell(id, row, col)))
            .collect()
    }

    pub fn contains(&self, plot_id: &PlotId) -> bool {
        let cell = plot_id
            .as_str()
            .strip_prefix(self.id)
            .and_then(|rest| rest.strip_prefix("-r"))
            .and_then(|rest| rest.split_once('c'));
        let Some((row, col)) = cell else {
            return false;
        };
        match (row.parse::<u32>(), col.parse::<u32>()) {
            (Ok(row), Ok(col)) => {
                (1..=self.rows).contains(&row)
                    && (1..=self.cols).contains(&col)
                    // reject non-canonical spellings such as `r01c1`
                    && PlotId::for_cell(self.id, row, col) == *plot_id
            }
            _ => false,
        }
    }
}

impl Section {
    #[cfg(test)]
    pub fn id(&self) -> &'static str {
        match self {
            Section::Bed(bed) => bed.id,
            Section::Tree(tree) => tree.id,
        }
    }

    pub fn plot_ids(&self) -> Vec<PlotId> {
        match self {
            Section::Bed(bed) => bed.plot_ids(),
            Section::Tree(_) => Vec::new(),
        }
    }

    pub fn contains(&self, plot_id: &PlotId) -> bool {
        match self {
            Section::Bed(bed) => bed.contains(plot_id),
            Section::Tree(_) => false,
        }
    }
}

/// Every plot id of the layout, in layout order
#[cfg(test)]
pub fn all_plot_ids(layout: &[Section]) -> Vec<PlotId> {
    layout.iter().flat_map(Section::plot_ids).collect()
}

pub fn contains_plot(layout: &[Section], plot_id: &PlotId) -> bool {
    layout.iter().any(|section| section.contains(plot_id))
}

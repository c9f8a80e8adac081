use crate::units::Pt;

/// Margins bound the content box of a [`Page`](crate::Page). Table rows are laid
/// out inside them, and the bottom margin decides where a table has to stop.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Width left for content on a page of the given width
    pub fn usable_width(&self, page_width: Pt) -> Pt {
        page_width - self.left - self.right
    }

    /// Height left for content on a page of the given height
    pub fn usable_height(&self, page_height: Pt) -> Pt {
        page_height - self.top - self.bottom
    }
}

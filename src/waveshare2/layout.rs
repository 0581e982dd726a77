//! Pixel positions of the UI elements
//!
//! There are two fixed tables, one for the `black` color mode and one for every other
//! mode. The table is picked once when the adapter is built and never changes after.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Line;

use crate::config::ColorMode;

/// Which of the configured fonts a text element uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Bold,
    BoldSmall,
    Medium,
    Huge,
}

/// Font sizes in pixels for each [`FontRole`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSizes {
    pub bold: u32,
    pub bold_small: u32,
    pub medium: u32,
    pub huge: u32,
}

impl FontSizes {
    pub const fn new(bold: u32, bold_small: u32, medium: u32, huge: u32) -> Self {
        Self {
            bold,
            bold_small,
            medium,
            huge,
        }
    }

    /// Size of the font used for `role`
    pub fn size_of(&self, role: FontRole) -> u32 {
        match role {
            FontRole::Bold => self.bold,
            FontRole::BoldSmall => self.bold_small,
            FontRole::Medium => self.medium,
            FontRole::Huge => self.huge,
        }
    }
}

/// Status text box: where it starts, which font it uses and how many characters
/// fit on one line before wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLayout {
    pub pos: Point,
    pub font: FontRole,
    pub max: usize,
}

/// One named element of the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Point(Point),
    Line(Line),
    Status(StatusLayout),
}

/// Coordinates of every UI element, in landscape orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub fonts: FontSizes,
    pub face: Point,
    pub name: Point,
    pub channel: Point,
    pub aps: Point,
    pub uptime: Point,
    pub line1: Line,
    pub line2: Line,
    pub friend_face: Point,
    pub friend_name: Point,
    pub shakes: Point,
    pub mode: Point,
    pub status: StatusLayout,
}

/// Element names in the order [`Layout::elements`] yields them
pub const ELEMENT_NAMES: [&str; 12] = [
    "face",
    "name",
    "channel",
    "aps",
    "uptime",
    "line1",
    "line2",
    "friend_face",
    "friend_name",
    "shakes",
    "mode",
    "status",
];

const fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Line {
    Line {
        start: Point::new(x0, y0),
        end: Point::new(x1, y1),
    }
}

impl Layout {
    /// Layout used when the panel is configured as `black`
    pub const BLACK: Layout = Layout {
        width: 250,
        height: 122,
        fonts: FontSizes::new(10, 9, 10, 35),
        face: Point::new(0, 40),
        name: Point::new(5, 20),
        channel: Point::new(0, 0),
        aps: Point::new(28, 0),
        uptime: Point::new(185, 0),
        line1: line(0, 14, 250, 14),
        line2: line(0, 108, 250, 108),
        friend_face: Point::new(0, 92),
        friend_name: Point::new(40, 94),
        shakes: Point::new(0, 109),
        mode: Point::new(225, 109),
        status: StatusLayout {
            pos: Point::new(125, 20),
            font: FontRole::Medium,
            max: 20,
        },
    };

    /// Layout used for every other color mode
    pub const OTHER: Layout = Layout {
        width: 212,
        height: 104,
        fonts: FontSizes::new(10, 8, 10, 25),
        face: Point::new(0, 26),
        name: Point::new(5, 15),
        channel: Point::new(0, 0),
        aps: Point::new(28, 0),
        uptime: Point::new(147, 0),
        line1: line(0, 12, 212, 12),
        line2: line(0, 92, 212, 92),
        friend_face: Point::new(0, 76),
        friend_name: Point::new(40, 78),
        shakes: Point::new(0, 93),
        mode: Point::new(187, 93),
        status: StatusLayout {
            pos: Point::new(125, 20),
            font: FontRole::Medium,
            max: 14,
        },
    };

    /// Select the table for a color mode
    pub fn for_color(color: &ColorMode) -> Layout {
        if color.is_black() {
            Self::BLACK
        } else {
            Self::OTHER
        }
    }

    /// Canvas size the layout is drawn on
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Look an element up by its UI name
    pub fn element(&self, name: &str) -> Option<Element> {
        let element = match name {
            "face" => Element::Point(self.face),
            "name" => Element::Point(self.name),
            "channel" => Element::Point(self.channel),
            "aps" => Element::Point(self.aps),
            "uptime" => Element::Point(self.uptime),
            "line1" => Element::Line(self.line1),
            "line2" => Element::Line(self.line2),
            "friend_face" => Element::Point(self.friend_face),
            "friend_name" => Element::Point(self.friend_name),
            "shakes" => Element::Point(self.shakes),
            "mode" => Element::Point(self.mode),
            "status" => Element::Status(self.status),
            _ => return None,
        };
        Some(element)
    }

    /// All named elements, in [`ELEMENT_NAMES`] order
    pub fn elements(&self) -> impl Iterator<Item = (&'static str, Element)> + '_ {
        ELEMENT_NAMES
            .iter()
            .filter_map(move |name| self.element(name).map(|element| (*name, element)))
    }
}

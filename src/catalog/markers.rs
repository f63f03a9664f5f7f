//! Map markers and their descriptive panels.

use crate::core::MarkerId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerKind {
    /// Main project location
    Flagship,
    /// Resource zone
    Zone,
    DrillTarget,
}

impl MarkerKind {
    /// Short badge shown in the panel header.
    pub fn badge(self) -> &'static str {
        match self {
            MarkerKind::Flagship => "PROJECT",
            MarkerKind::Zone => "ZONE",
            MarkerKind::DrillTarget => "TARGET",
        }
    }
}

/// A fixed point on the project map. Coordinates are percentages of the
/// map box, measured from the top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: MarkerId,
    pub x: f32,
    pub y: f32,
    pub name: String,
    pub detail: String,
    pub kind: MarkerKind,
}

/// Descriptive panel shown next to the active marker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerPanel<'a> {
    pub marker: &'a MarkerId,
    pub anchor: (f32, f32),
    pub badge: &'static str,
    pub title: &'a str,
    pub body: &'a str,
}

impl Marker {
    pub fn new(
        id: &str,
        (x, y): (f32, f32),
        name: &str,
        detail: &str,
        kind: MarkerKind,
    ) -> Self {
        Self {
            id: MarkerId::new(id),
            x,
            y,
            name: name.to_string(),
            detail: detail.to_string(),
            kind,
        }
    }

    pub fn panel(&self) -> MarkerPanel<'_> {
        MarkerPanel {
            marker: &self.id,
            anchor: (self.x, self.y),
            badge: self.kind.badge(),
            title: &self.name,
            body: &self.detail,
        }
    }

    pub fn in_bounds(&self) -> bool {
        let range = 0.0..=100.0;
        range.contains(&self.x) && range.contains(&self.y)
    }
}

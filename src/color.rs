use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Red ascents, blue descents, green exit. The original pit palette.
    #[default]
    Classic,
    Heat,
    Ocean,
    Mono,
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "heat" => Ok(Self::Heat),
            "ocean" => Ok(Self::Ocean),
            "mono" | "monochrome" => Ok(Self::Mono),
            _ => Err(format!(
                "Unknown color scheme: {} (expected classic, heat, ocean or mono)",
                s
            )),
        }
    }
}

impl ColorScheme {
    /// Color of a trajectory edge. Ascending edges are the `3n + 1`
    /// steps, descending edges the halvings.
    pub fn edge_color(&self, ascending: bool) -> Rgb {
        let (h, s, l) = match (self, ascending) {
            (ColorScheme::Classic, true) => (0.0, 0.85, 0.45),
            (ColorScheme::Classic, false) => (225.0, 0.85, 0.45),
            (ColorScheme::Heat, true) => (15.0, 0.95, 0.5),
            (ColorScheme::Heat, false) => (45.0, 0.9, 0.4),
            (ColorScheme::Ocean, true) => (170.0, 0.8, 0.4),
            (ColorScheme::Ocean, false) => (215.0, 0.8, 0.35),
            (ColorScheme::Mono, true) => (0.0, 0.0, 0.2),
            (ColorScheme::Mono, false) => (0.0, 0.0, 0.55),
        };
        hsl_to_rgb(h, s, l)
    }

    /// Marker at the starting value.
    pub fn start_color(&self) -> Rgb {
        self.edge_color(true)
    }

    /// Marker at the exit value 1.
    pub fn exit_color(&self) -> Rgb {
        match self {
            ColorScheme::Mono => hsl_to_rgb(0.0, 0.0, 0.0),
            _ => hsl_to_rgb(120.0, 0.7, 0.35),
        }
    }

    /// Gridlines, spokes and the central axis.
    pub fn frame_color(&self) -> Rgb {
        hsl_to_rgb(0.0, 0.0, 0.35)
    }
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let rgb: Srgb = Hsl::new(h, s, l).into_color();
    (
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

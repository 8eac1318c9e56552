// Figure descriptions, serialized in the shape plotly.js expects
use serde::Serialize;

pub const BACKGROUND: &str = "rgb(73, 79, 89)";
pub const TEXT: &str = "rgb(255,255,255)";
pub const LAND: &str = "rgb(200, 200, 200)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scattergeo(GeoTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub name: String,
    pub x: Vec<String>,
    /// `None` serializes as `null`, which plotly leaves as a gap
    pub y: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoMode {
    Markers,
    Lines,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoTrace {
    pub locationmode: String,
    pub mode: GeoMode,
    pub lon: Vec<Option<f64>>,
    pub lat: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl GeoTrace {
    fn new(mode: GeoMode, lon: Vec<Option<f64>>, lat: Vec<Option<f64>>) -> Self {
        Self {
            locationmode: "country names".to_string(),
            mode,
            lon,
            lat,
            text: None,
            hoverinfo: None,
            marker: None,
            line: None,
            opacity: None,
        }
    }

    pub fn markers(lon: Vec<Option<f64>>, lat: Vec<Option<f64>>) -> Self {
        Self::new(GeoMode::Markers, lon, lat)
    }

    pub fn lines(lon: Vec<Option<f64>>, lat: Vec<Option<f64>>) -> Self {
        Self::new(GeoMode::Lines, lon, lat)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: f64,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Stack,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub showgrid: bool,
    pub gridcolor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LonAxis {
    pub range: [f64; 2],
    pub dtick: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
    pub scope: String,
    pub resolution: u32,
    pub projection: Projection,
    pub showland: bool,
    pub showocean: bool,
    pub oceancolor: String,
    pub landcolor: String,
    pub showcountries: bool,
    pub lonaxis: LonAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<BarMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

impl Layout {
    /// Dark background with light text, shared by every chart on the page.
    pub fn dark(title: &str) -> Self {
        Self {
            title: Title {
                text: title.to_string(),
            },
            paper_bgcolor: BACKGROUND.to_string(),
            plot_bgcolor: BACKGROUND.to_string(),
            font: Font {
                color: TEXT.to_string(),
            },
            barmode: None,
            yaxis: None,
            showlegend: None,
            geo: None,
        }
    }
}

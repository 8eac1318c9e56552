// Series and attack path domain models

/// Fixed destination of every attack path (Calgary).
pub const HOME: GeoPoint = GeoPoint {
    lon: -114.0708,
    lat: 51.0486,
};

/// A named run of values sharing a categorical axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub axis: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl Series {
    pub fn new(name: impl Into<String>, axis: Vec<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            axis,
            values,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

/// Source coordinates may be missing; such a path has nothing to draw but still occupies its row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackPath {
    pub source_lon: Option<f64>,
    pub source_lat: Option<f64>,
    pub to: GeoPoint,
}

impl AttackPath {
    pub fn new(source_lon: Option<f64>, source_lat: Option<f64>, to: GeoPoint) -> Self {
        Self {
            source_lon,
            source_lat,
            to,
        }
    }
}

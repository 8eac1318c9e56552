// Figure assembly for the three dashboard charts
use crate::application::series_builder::{attack_paths, click_series, threat_series};
use crate::domain::figure::{
    Axis, BarMode, BarTrace, Figure, Geo, GeoTrace, Layout, Line, LonAxis, Marker, Projection,
    Trace, BACKGROUND, LAND, TEXT,
};
use crate::domain::records::{ClickRecord, SignatureHitRecord, ThreatCountRecord};
use crate::domain::series::{Series, HOME};

pub const PHISHING_VICTIMS_TITLE: &str = "Phishing Victims: Last 7 Days";
pub const PHISHING_THREATS_TITLE: &str = "Phishing Threats: Last 7 Days";
pub const THREAT_MAP_TITLE: &str = "IDS/IPS Signature Hits: Last 24 Hours";

/// Map window centred on the home longitude.
const LON_RANGE: [f64; 2] = [-294.0708, 65.9292];

pub fn phishing_victims_figure(rows: &[ClickRecord]) -> Figure {
    stacked_bar_figure(PHISHING_VICTIMS_TITLE, click_series(rows))
}

pub fn phishing_threats_figure(rows: &[ThreatCountRecord]) -> Figure {
    stacked_bar_figure(PHISHING_THREATS_TITLE, threat_series(rows))
}

/// One bar trace per series, stacked, with a visible horizontal grid.
pub fn stacked_bar_figure(title: &str, series: Vec<Series>) -> Figure {
    let data = series
        .into_iter()
        .map(|s| {
            Trace::Bar(BarTrace {
                name: s.name,
                x: s.axis,
                y: s.values,
            })
        })
        .collect();

    let mut layout = Layout::dark(title);
    layout.barmode = Some(BarMode::Stack);
    layout.yaxis = Some(Axis {
        showgrid: true,
        gridcolor: TEXT.to_string(),
    });

    Figure::new(data, layout)
}

/// Attack paths first, then the hit markers so they draw on top.
pub fn threat_map_figure(rows: &[SignatureHitRecord]) -> Figure {
    let mut data: Vec<Trace> = attack_paths(rows, HOME)
        .into_iter()
        .map(|path| {
            let mut trace = GeoTrace::lines(
                vec![path.source_lon, Some(path.to.lon)],
                vec![path.source_lat, Some(path.to.lat)],
            );
            trace.line = Some(Line { width: 2.0 });
            trace.opacity = Some(1.0);
            Trace::Scattergeo(trace)
        })
        .collect();

    let mut points = GeoTrace::markers(
        rows.iter().map(|r| r.longitude).collect(),
        rows.iter().map(|r| r.latitude).collect(),
    );
    points.hoverinfo = Some("text".to_string());
    points.text = Some(rows.iter().map(|r| r.policy_name.clone()).collect());
    points.marker = Some(Marker {
        size: 2.0,
        line: Line { width: 3.0 },
    });
    data.push(Trace::Scattergeo(points));

    let mut layout = Layout::dark(THREAT_MAP_TITLE);
    layout.showlegend = Some(false);
    layout.geo = Some(Geo {
        scope: "world".to_string(),
        resolution: 50,
        projection: Projection {
            kind: "equirectangular".to_string(),
        },
        showland: true,
        showocean: true,
        oceancolor: BACKGROUND.to_string(),
        landcolor: LAND.to_string(),
        showcountries: true,
        lonaxis: LonAxis {
            range: LON_RANGE,
            dtick: 10.0,
        },
    });

    Figure::new(data, layout)
}

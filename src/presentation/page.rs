// Dashboard shell: two rows of chart regions fed by the /events stream
use crate::domain::slot::ChartSlot;
use std::time::Duration;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = r#"
body { margin: 0; padding: 12px; background: rgb(73, 79, 89); color: rgb(255,255,255); font-family: sans-serif; }
.row { display: flex; gap: 12px; margin-bottom: 12px; }
.six.columns { flex: 0 0 calc(50% - 6px); position: relative; }
.chart { height: 450px; }
.chart-error { display: none; position: absolute; top: 8px; left: 8px; right: 8px; z-index: 10;
  padding: 6px 10px; background: rgba(180, 40, 40, 0.9); border-radius: 3px; font-size: 13px; }
.chart-error.visible { display: block; }
.pending { padding: 200px 0; text-align: center; opacity: 0.6; }
.status { font-size: 12px; opacity: 0.7; }
"#;

// Keeps the last drawn figure when an update carries only an error.
const SCRIPT: &str = r#"
const intervalMs = Number(document.querySelector('meta[name="refresh-interval-ms"]').content);
const status = document.getElementById('refresh-status');
let lastUpdate = null;

function renderStatus() {
  if (!lastUpdate) return;
  const remaining = Math.max(0, Math.round((lastUpdate.getTime() + intervalMs - Date.now()) / 1000));
  status.textContent = 'Last updated ' + lastUpdate.toLocaleTimeString() + ', next refresh in ~' + remaining + 's';
}
setInterval(renderStatus, 1000);

const source = new EventSource('/events');
source.addEventListener('slot', (msg) => {
  const state = JSON.parse(msg.data);
  lastUpdate = new Date(state.updated_at);
  renderStatus();
  const region = document.getElementById(state.slot);
  const banner = document.getElementById(state.slot + '-error');
  if (!region) return;
  if (state.figure) {
    region.classList.remove('pending');
    Plotly.react(region, state.figure.data, state.figure.layout);
  }
  if (state.error) {
    banner.textContent = 'Refresh failed (' + state.error.code + '): ' + state.error.message;
    banner.classList.add('visible');
  } else {
    banner.classList.remove('visible');
  }
});
"#;

fn chart_region(slot: ChartSlot) -> String {
    let id = slot.id();
    format!(
        r#"<div class="six columns"><div id="{id}-error" class="chart-error"></div><div id="{id}" class="chart pending">Loading&hellip;</div></div>"#
    )
}

/// Row 1: phishing victims and the threat map side by side. Row 2: phishing threats.
pub fn render_page(refresh_interval: Duration) -> String {
    let rows = [
        vec![ChartSlot::PhishingVictims, ChartSlot::ThreatMap],
        vec![ChartSlot::PhishingThreats],
    ];

    let body: String = rows
        .iter()
        .map(|row| {
            let regions: String = row.iter().map(|slot| chart_region(*slot)).collect();
            format!(r#"<div class="row">{regions}</div>"#)
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="refresh-interval-ms" content="{interval}">
<title>Security Dashboard</title>
<script src="{PLOTLY_JS}"></script>
<style>{STYLE}</style>
</head>
<body>
{body}
<div id="refresh-status" class="status">Waiting for first refresh&hellip;</div>
<script>{SCRIPT}</script>
</body>
</html>
"#,
        interval = refresh_interval.as_millis(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_layout() {
        let page = render_page(Duration::from_secs(60));

        assert_eq!(page.matches(r#"class="row""#).count(), 2);
        for slot in ChartSlot::ALL {
            assert!(page.contains(&format!(r#"id="{}""#, slot.id())));
            assert!(page.contains(&format!(r#"id="{}-error""#, slot.id())));
        }
        assert!(page.contains(r#"<meta name="refresh-interval-ms" content="60000">"#));
        assert!(page.contains(r#"id="refresh-status""#));
        assert!(page.contains("refresh-interval-ms\"]').content"));

        let victims = page.find("phishing-stacked-bar").unwrap();
        let map = page.find(r#"id="threat_map""#).unwrap();
        let threats = page.find("threats-stacked-bar").unwrap();
        assert!(victims < map && map < threats);
    }
}

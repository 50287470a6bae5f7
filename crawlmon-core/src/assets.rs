//! Built-in Serving Documents
//!
//! The node serves two fixed-shape documents: a JSON status body for machine
//! consumers and a small self-refreshing web page. Both are embedded inline -
//! there is no filesystem on the device - and parsed once at startup into the
//! static template registry.
//!
//! Placeholders not yet present in the snapshot (future fields kept in the
//! markup) render as their own token and stay syntactically harmless.

use crate::errors::TelemetryResult;
use crate::template::{StaticTemplates, Template};

/// Name of the JSON status document
pub const STATUS_DOC: &str = "status";

/// Name of the web page document
pub const INDEX_DOC: &str = "index";

/// JSON status body
pub const STATUS_JSON: &str = r#"{
  "name": "Crawlspace",
  "id": "%MACADDR%",

  "door": "%DOOR%",
  "motion": "%MOTION%",
  "luminance": "%LUMINANCE%",
  "flowcount": "%WATERFLOW%",

  "flowstats": {
    "minute": "%FLOWMINUTE%",
    "hour": "%FLOWHOUR%",
    "day": "%FLOWDAY%"
  },

  "temperature": "%TEMPERATURE%",
  "temp_scale": "C",
  "humidity": "%HUMIDITY%",

  "uptime": "%MILLIS%"
}
"#;

/// Self-refreshing status page
///
/// The scripts poll single fields through the `/stat?NAME` query, which maps
/// to the strict field lookup; the dash fallback below matches the
/// unavailable literal the snapshot itself renders.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Crawlspace Monitor</title>
  <meta name="viewport" content="width=device-width, initial-scale=1">
<style>
html {
  display: inline-block;
  margin: 0px auto;
  text-align: center;
}
h1 {
  color: #0F3376;
  padding: 2vh;
}
.sensor-labels {
  vertical-align: middle;
  padding-bottom: 15px;
}
</style>
</head>
<body>
  <h1>Crawlspace Monitor</h1>

  <p>
    <span class="sensor-labels">Water Flow:</span>
    <span id="waterflow">%WATERFLOW%</span>
    <sup class="units">L</sup>
  </p>
  <p>
    <span class="sensor-labels">Luminance:</span>
    <span id="luminance">%LUMINANCE%</span>
    <sup class="units">lux</sup>
  </p>
  <p>
    <span class="sensor-labels">Door:</span>
    <span id="door">%DOOR%</span>
  </p>
  <p>
    <span class="sensor-labels">Uptime:</span>
    <span id="uptime">%UPTIME%</span>
    <sup class="units">s</sup>
  </p>
  <!-- not wired up yet: flow units depend on the meter model
  <p>
    <span class="sensor-labels">Flow units:</span>
    <span id="flowunits">%FLOWUNITS%</span>
  </p>
  -->
</body>

<!-- poll and reload values every 10s -->
<script>
  setInterval(function () {
    var xhttp = new XMLHttpRequest();
    xhttp.onreadystatechange = function() {
      if (this.readyState == 4 && this.status == 200) {
        document.getElementById("waterflow").innerHTML = this.responseText;
      }
    };
    xhttp.open("GET", "/stat?WATERFLOW", true);
    xhttp.send();
  }, 10000);

  setInterval(function () {
    var xhttp = new XMLHttpRequest();
    xhttp.onreadystatechange = function() {
      if (this.readyState == 4) {
        document.getElementById("luminance").innerHTML = (this.status == 200 ? this.responseText : "-");
      }
    };
    xhttp.open("GET", "/stat?LUMINANCE", true);
    xhttp.send();
  }, 10000);

  setInterval(function () {
    var xhttp = new XMLHttpRequest();
    xhttp.onreadystatechange = function() {
      if (this.readyState == 4 && this.status == 200) {
        document.getElementById("door").innerHTML = this.responseText;
      }
    };
    xhttp.open("GET", "/stat?DOOR", true);
    xhttp.send();
  }, 10000);

  setInterval(function () {
    var xhttp = new XMLHttpRequest();
    xhttp.onreadystatechange = function() {
      if (this.readyState == 4 && this.status == 200) {
        document.getElementById("uptime").innerHTML = this.responseText;
      }
    };
    xhttp.open("GET", "/stat?UPTIME", true);
    xhttp.send();
  }, 10000);
</script>
</html>
"#;

/// Registry with both built-in documents parsed and registered
pub fn builtin() -> TelemetryResult<StaticTemplates<'static>> {
    let mut templates = StaticTemplates::new();
    templates.register(STATUS_DOC, Template::parse(STATUS_JSON)?)?;
    templates.register(INDEX_DOC, Template::parse(INDEX_HTML)?)?;
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateSource;

    #[test]
    fn builtin_documents_parse_and_register() {
        let templates = builtin().unwrap();

        let status = templates.get(STATUS_DOC).unwrap();
        assert!(status.has_placeholders());

        let index = templates.get(INDEX_DOC).unwrap();
        assert!(index.has_placeholders());
        assert!(templates.get("nope").is_none());
    }
}

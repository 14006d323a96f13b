/// Event name logged when the property pane close button is clicked.
pub const PROPERTY_PANE_CLOSE_CLICK: &str = "PROPERTY_PANE_CLOSE_CLICK";

/// Fire-and-forget analytics.
pub trait TelemetrySink {
    fn log_event(&mut self, name: &str, properties: serde_json::Value);
}

/// Emits analytics as tracing events on the `telemetry` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn log_event(&mut self, name: &str, properties: serde_json::Value) {
        tracing::info!(target: "telemetry", event = name, properties = %properties);
    }
}

// File: crates/dashboard/src/charts.rs
// Summary: The fixed battery telemetry chart set and the dataset field names it reads.

use chart_core::{Chart, ChartError, Series};

pub const TIME_STAMP: &str = "TimeStamp";
pub const STATE_OF_CHARGE: &str = "StateOfChargeBMS";
pub const BATTERY_CURRENT: &str = "BatteryCurrent";
pub const BATTERY_VOLTAGE: &str = "BatteryDCVoltage";
pub const MAX_TEMPERATURE: &str = "BatteryMaxTemperature";
pub const MIN_TEMPERATURE: &str = "BatteryMinTemperature";
pub const MAX_CELL_VOLTAGE: &str = "MaxCellVoltage";
pub const MIN_CELL_VOLTAGE: &str = "MinCellVoltage";
pub const STATE_OF_HEALTH: &str = "StateOfHealth";
pub const SPEED: &str = "Speed";
pub const ACCELERATION_X: &str = "AccelerationX";
pub const ACCELERATION_Y: &str = "AccelerationY";
pub const ACCELERATION_Z: &str = "AccelerationZ";
pub const ALTITUDE: &str = "Altitude";

fn series(key: &str, name: &str, color: &str, unit: &str) -> Result<Series, ChartError> {
    Ok(Series::new(key, name).with_hex(color)?.with_unit(unit))
}

/// Dashboard charts in display order.
pub fn battery_charts() -> Result<Vec<Chart>, ChartError> {
    Ok(vec![
        Chart::single("Battery State of Charge", TIME_STAMP, STATE_OF_CHARGE, "#10B981", "%")?,
        Chart::single("Battery Current", TIME_STAMP, BATTERY_CURRENT, "#3B82F6", " A")?,
        Chart::single("Battery Voltage", TIME_STAMP, BATTERY_VOLTAGE, "#F59E0B", " V")?,
        Chart::new("Battery Temperature", TIME_STAMP)
            .with_series(series(MAX_TEMPERATURE, "Max Temp", "#EF4444", "°C")?)
            .with_series(series(MIN_TEMPERATURE, "Min Temp", "#3B82F6", "°C")?),
        Chart::new("Cell Voltage", TIME_STAMP)
            .with_series(series(MAX_CELL_VOLTAGE, "Max Cell", "#EC4899", " V")?)
            .with_series(series(MIN_CELL_VOLTAGE, "Min Cell", "#8B5CF6", " V")?),
        Chart::single("Battery State of Health", TIME_STAMP, STATE_OF_HEALTH, "#14B8A6", "%")?,
        Chart::single("Vehicle Speed", TIME_STAMP, SPEED, "#8D5524", " km/h")?,
        Chart::new("Acceleration", TIME_STAMP)
            .with_series(series(ACCELERATION_X, "X-Axis", "#EF4444", " m/s²")?)
            .with_series(series(ACCELERATION_Y, "Y-Axis", "#10B981", " m/s²")?)
            .with_series(series(ACCELERATION_Z, "Z-Axis", "#3B82F6", " m/s²")?),
        Chart::single("Altitude", TIME_STAMP, ALTITUDE, "#7C3AED", " m")?,
    ])
}

/// File-name stem for a chart title: lowercase words joined by `-`.
pub fn slug(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

use crate::model::BoxDimensions;

/// Shown before any box exists.
pub const EMPTY_READOUT: &str = "No cube created yet.";

/// Formats the outer dimensions panel, two decimals per line.
#[must_use]
pub fn format_readout(dimensions: Option<&BoxDimensions>, unit: &str) -> String {
    let Some(dims) = dimensions else {
        return EMPTY_READOUT.to_owned();
    };
    [
        format!("Length: {:.2} {unit}", dims.length),
        format!("Breadth: {:.2} {unit}", dims.breadth),
        format!("Height: {:.2} {unit}", dims.height),
    ]
    .join("\n")
}

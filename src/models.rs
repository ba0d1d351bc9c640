use serde::Deserialize;

/// Column order the model was trained on. The inference adapter builds its
/// one-row input in exactly this order, and the artifact must declare the
/// same columns at load time.
pub const FEATURE_COLUMNS: [&str; 3] = ["Area", "No. of Bedrooms", "Location"];

/// Raw form fields as submitted by the browser.
///
/// All fields are optional so that a missing one is reported on the page
/// like any other input problem instead of failing inside the extractor.
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    #[serde(rename = "Area")]
    pub area: Option<String>,
    #[serde(rename = "No_of_Bedrooms")]
    pub bedrooms: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
}

/// One row of model input, columns ordered per [`FEATURE_COLUMNS`].
#[derive(Debug, Clone, PartialEq)]
pub struct PriceInput {
    pub area: f64,
    pub bedrooms: i64,
    pub location: String,
}

impl PredictForm {
    /// Parse the submitted strings into a model input row.
    ///
    /// Area must read as a float and the bedroom count as an integer. The
    /// location is passed through as-is; whether it is one the model knows
    /// is decided at prediction time.
    pub fn parse(&self) -> Result<PriceInput, String> {
        let area = required("Area", &self.area)?;
        let bedrooms = required("No_of_Bedrooms", &self.bedrooms)?;
        let location = required("Location", &self.location)?;

        let area: f64 = area
            .trim()
            .parse()
            .map_err(|_| format!("could not read '{}' as a number for Area", area))?;
        let bedrooms: i64 = bedrooms.trim().parse().map_err(|_| {
            format!(
                "could not read '{}' as a whole number for No_of_Bedrooms",
                bedrooms
            )
        })?;

        Ok(PriceInput {
            area,
            bedrooms,
            location: location.clone(),
        })
    }
}

fn required<'a>(name: &str, value: &'a Option<String>) -> Result<&'a String, String> {
    value
        .as_ref()
        .ok_or_else(|| format!("missing form field '{}'", name))
}

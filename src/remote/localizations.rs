use super::*;

impl AscClient {
    pub fn list_localizations(&self, version_id: &str) -> Result<Vec<Localization>> {
        let resp = self.get(&format!(
            "/v1/appStoreVersions/{}/appStoreVersionLocalizations",
            version_id
        ))?;
        if !resp.status().is_success() {
            println!("Error getting localizations: {}", resp.status().as_u16());
            println!("{}", error_body(resp));
            return Ok(Vec::new());
        }

        let doc: Document<Vec<Resource<LocalizationAttributes>>> =
            resp.json().context("parse localizations")?;
        let localizations: Vec<Localization> =
            doc.data.into_iter().map(Localization::from).collect();
        for loc in &localizations {
            println!("  Localization: {} (locale: {})", loc.id, loc.locale);
        }
        Ok(localizations)
    }
}

/// Picks `preferred` if the version has it, otherwise the first localization.
pub fn select_localization<'a>(
    localizations: &'a [Localization],
    preferred: &str,
) -> Option<&'a Localization> {
    localizations
        .iter()
        .find(|l| l.locale == preferred)
        .or_else(|| localizations.first())
}

#[cfg(test)]
#[path = "../tests/remote/localizations_tests.rs"]
mod tests;
